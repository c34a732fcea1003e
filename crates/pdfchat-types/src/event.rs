use serde::{Deserialize, Serialize};

use crate::error::AlertKind;
use crate::message::Message;
use crate::upload::UploadStatus;

/// Notifications published by the session controller.
/// The UI drains these to keep its projection current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Upload status or staged file changed
    UploadStatusChanged {
        status: UploadStatus,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        file_name: Option<String>,
    },

    /// The processing request failed and the staged file was dropped
    UploadFailed { file_name: String, message: String },

    /// A message was appended to the history
    MessageAppended { message: Message },

    /// Draft text was replaced by the controller
    DraftChanged { text: String },

    /// A user-visible alert
    Alert { kind: AlertKind, message: String },

    /// History was cleared for a new chat
    SessionReset { session_id: String },
}
