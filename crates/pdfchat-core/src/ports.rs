//! Port traits: the hexagonal architecture boundary.
//!
//! Defined here in `pdfchat-core` (pure Rust). Browser implementations live
//! in `pdfchat-platform`; tests supply their own mocks.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use pdfchat_types::{Result, upload::SelectedFile};

// ─── Processing Port ─────────────────────────────────────────

/// The external document-processing service.
#[async_trait(?Send)]
pub trait ProcessingPort {
    /// Upload a PDF for processing. `Ok(())` means the backend accepted it.
    async fn process_pdf(&self, file: &SelectedFile) -> Result<()>;

    /// Tell the backend to stop processing `file_name`.
    /// Best-effort: callers only log the outcome.
    async fn cancel_processing(&self, file_name: &str) -> Result<()>;
}

// ─── Spawn Port ──────────────────────────────────────────────

/// Runs detached tasks on the single-threaded executor.
pub trait SpawnPort {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
