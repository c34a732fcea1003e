//! UI-level state that drives rendering.
//! A read-only projection of the chat session, updated each frame by
//! draining the EventBus. The draft is the one field the panel edits
//! directly; every edit is forwarded to the session as `UpdateDraft`.

use pdfchat_types::error::AlertKind;
use pdfchat_types::event::ChatEvent;
use pdfchat_types::message::Message;
use pdfchat_types::upload::UploadStatus;

/// State visible to the chat panel
pub struct UiState {
    pub messages: Vec<Message>,
    pub upload_status: UploadStatus,
    /// Staged file shown as a chip above the input
    pub staged_file: Option<String>,
    /// Input box content
    pub draft: String,
    /// Banner shown until dismissed or replaced
    pub alert: Option<Alert>,
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            upload_status: UploadStatus::Idle,
            staged_file: None,
            draft: String::new(),
            alert: None,
            status_text: UploadStatus::Idle.label().to_string(),
        }
    }

    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::UploadStatusChanged { status, file_name } => {
                    self.status_text = match (&status, &file_name) {
                        (UploadStatus::Uploading, Some(name)) => format!("Processing {}...", name),
                        (UploadStatus::Sent, Some(name)) => format!("{} ready", name),
                        _ => status.label().to_string(),
                    };
                    self.upload_status = status;
                    self.staged_file = file_name;
                }
                ChatEvent::UploadFailed { file_name, .. } => {
                    self.status_text = format!("{} was not processed", file_name);
                }
                ChatEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                ChatEvent::DraftChanged { text } => {
                    self.draft = text;
                }
                ChatEvent::Alert { kind, message } => {
                    log::debug!("alert: {}", message);
                    self.alert = Some(Alert { kind, message });
                }
                ChatEvent::SessionReset { .. } => {
                    self.messages.clear();
                    self.alert = None;
                }
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn is_busy(&self) -> bool {
        self.upload_status.is_busy()
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self) -> bool {
        match self.upload_status {
            UploadStatus::Uploading => false,
            UploadStatus::Sent => true,
            UploadStatus::Idle => !self.draft.trim().is_empty(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
