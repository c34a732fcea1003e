use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Origin of the processing service, e.g. `http://localhost:8000`
    pub api_base: String,
    pub process_path: String,
    pub cancel_path: String,
    /// Fixed bot reply for every sent message
    pub placeholder_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            process_path: "/process-pdf/".to_string(),
            cancel_path: "/cancel-processing/".to_string(),
            placeholder_reply: PLACEHOLDER_REPLY.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn process_url(&self) -> String {
        join_url(&self.api_base, &self.process_path)
    }

    pub fn cancel_url(&self) -> String {
        join_url(&self.api_base, &self.cancel_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const PLACEHOLDER_REPLY: &str = "Backend not connected";
