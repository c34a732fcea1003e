use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The only MIME type accepted for upload.
pub const PDF_MIME: &str = "application/pdf";

/// Upload lifecycle of the staged file.
///
/// A failed upload does not rest in its own state: it drops straight back to
/// `Idle` and is reported through `ChatEvent::UploadFailed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    #[default]
    Idle,
    /// Request to the processing endpoint is outstanding
    Uploading,
    /// Backend accepted the file for questioning
    Sent,
}

impl UploadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "Ready",
            UploadStatus::Uploading => "Processing PDF...",
            UploadStatus::Sent => "PDF ready",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }
}

/// A file picked by the user, before any validation.
#[derive(Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case(PDF_MIME)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Keep file contents out of log output.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Body of `POST /cancel-processing/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub filename: String,
}
