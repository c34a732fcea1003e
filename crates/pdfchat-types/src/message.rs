use serde::{Deserialize, Serialize};

/// One exchange in the chat history.
///
/// Messages are immutable once appended. Every exchange carries a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Set only on the message that carried the uploaded PDF
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_text: Option<String>,
    /// Reply shown on the bot side of the conversation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bot_text: Option<String>,
}

impl Message {
    /// A user turn (file and/or text) answered by `reply`.
    pub fn exchange(
        file_name: Option<String>,
        user_text: Option<String>,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            file_name,
            user_text,
            bot_text: Some(reply.into()),
        }
    }

    pub fn has_file(&self) -> bool {
        self.file_name.is_some()
    }
}
