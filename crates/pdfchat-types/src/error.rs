use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Only PDF files are allowed! ({file_name} is {mime_type})")]
    NotPdf { file_name: String, mime_type: String },

    #[error("No file was selected")]
    NoFile,

    #[error("Select a single PDF ({0} files were chosen)")]
    MultipleFiles(usize),

    #[error("Only one PDF can be uploaded per chat. Start a new chat to upload another.")]
    OnePdfPerChat,

    #[error("{0} is still being processed")]
    UploadInProgress(String),

    #[error("Wait for {0} to finish processing before sending")]
    UploadPending(String),

    #[error("Upload failed: {detail}")]
    Backend { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

/// How an error is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Rejected locally, nothing changed
    Validation,
    /// The processing request failed
    Transport,
}

impl ChatError {
    pub fn kind(&self) -> AlertKind {
        match self {
            ChatError::NotPdf { .. }
            | ChatError::NoFile
            | ChatError::MultipleFiles(_)
            | ChatError::OnePdfPerChat
            | ChatError::UploadInProgress(_)
            | ChatError::UploadPending(_) => AlertKind::Validation,
            _ => AlertKind::Transport,
        }
    }

    /// User-initiated aborts are never shown as errors.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ChatError::Cancelled)
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
