//! Session runtime: executes the effects produced by the controller.
//!
//! `dispatch` applies one event to the session, releases the borrow, then
//! runs the effects:
//! - `Upload` is spawned wrapped in `Abortable`; its completion comes back
//!   through `dispatch` as `SessionEvent::UploadFinished`.
//! - `NotifyCancel` is spawned and only logged.
//! - `Publish` goes onto the event bus for the UI.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortRegistration, Abortable, Aborted};
use pdfchat_types::{config::ChatConfig, upload::SelectedFile};

use crate::event_bus::EventBus;
use crate::ports::{ProcessingPort, SpawnPort};
use crate::session::{Effect, Session, SessionEvent, UploadOutcome};

/// Clone-cheap handle shared by the UI and spawned tasks.
#[derive(Clone)]
pub struct ChatRuntime {
    session: Rc<RefCell<Session>>,
    processing: Rc<dyn ProcessingPort>,
    spawner: Rc<dyn SpawnPort>,
    event_bus: EventBus,
}

impl ChatRuntime {
    pub fn new(
        config: &ChatConfig,
        processing: Rc<dyn ProcessingPort>,
        spawner: Rc<dyn SpawnPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::new(config))),
            processing,
            spawner,
            event_bus,
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Read the current session state.
    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.session.borrow())
    }

    pub fn dispatch(&self, event: SessionEvent) {
        let effects = self.session.borrow_mut().apply(event);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Publish(event) => self.event_bus.emit(event),
            Effect::Upload {
                request_id,
                file,
                registration,
            } => {
                let runtime = self.clone();
                self.spawner.spawn(Box::pin(async move {
                    let outcome = runtime.upload(file, registration).await;
                    runtime.dispatch(SessionEvent::UploadFinished { request_id, outcome });
                }));
            }
            Effect::NotifyCancel { file_name } => {
                let processing = self.processing.clone();
                self.spawner.spawn(Box::pin(async move {
                    match processing.cancel_processing(&file_name).await {
                        Ok(()) => log::info!("backend acknowledged cancel of {}", file_name),
                        Err(e) => log::warn!("cancel notice for {} failed: {}", file_name, e),
                    }
                }));
            }
        }
    }

    async fn upload(&self, file: SelectedFile, registration: AbortRegistration) -> UploadOutcome {
        let processing = self.processing.clone();
        let request = async move { processing.process_pdf(&file).await };

        match Abortable::new(request, registration).await {
            Ok(Ok(())) => UploadOutcome::Accepted,
            Ok(Err(e)) if e.is_cancellation() => UploadOutcome::Cancelled,
            Ok(Err(e)) => UploadOutcome::Failed(e),
            Err(Aborted) => UploadOutcome::Cancelled,
        }
    }
}
