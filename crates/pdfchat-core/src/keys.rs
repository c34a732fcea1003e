//! Key bindings for the draft input.
//!
//! Enter submits, Shift+Enter inserts a newline at the caret. Everything else
//! is left to the text widget.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    /// Caret position in the draft, in chars. `None` means the end.
    pub caret: Option<usize>,
}

impl KeyInput {
    pub fn enter() -> Self {
        Self { key: Key::Enter, shift: false, caret: None }
    }

    pub fn shift_enter() -> Self {
        Self { key: Key::Enter, shift: true, caret: None }
    }

    pub fn other() -> Self {
        Self { key: Key::Other, shift: false, caret: None }
    }

    pub fn at(self, caret: usize) -> Self {
        Self { caret: Some(caret), ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    /// Insert a newline at the given caret, or at the end
    InsertNewline(Option<usize>),
    Ignore,
}

pub fn classify(input: KeyInput) -> KeyAction {
    match input {
        KeyInput { key: Key::Enter, shift: false, .. } => KeyAction::Submit,
        KeyInput { key: Key::Enter, shift: true, caret } => KeyAction::InsertNewline(caret),
        KeyInput { key: Key::Other, .. } => KeyAction::Ignore,
    }
}
