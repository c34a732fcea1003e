//! Outbox of `ChatEvent`s from the session runtime to the UI.
//!
//! Effects are published as the runtime executes them, including from
//! spawned upload tasks; the app takes the whole batch once per frame.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use pdfchat_types::event::ChatEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    pending: Rc<RefCell<Vec<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ChatEvent) {
        log::trace!("publish {:?}", event);
        self.pending.borrow_mut().push(event);
    }

    /// Take every pending event in publish order, leaving the bus empty.
    pub fn drain(&self) -> Vec<ChatEvent> {
        mem::take(&mut *self.pending.borrow_mut())
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }
}
