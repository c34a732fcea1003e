//! Cancellation handle for the in-flight upload.
//!
//! The session keeps the `CancelHandle`; the matching `AbortRegistration`
//! travels with the upload effect and is consumed by `Abortable` in the runtime.

use futures::future::{AbortHandle, AbortRegistration};

#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: AbortHandle,
}

impl CancelHandle {
    pub fn new_pair() -> (Self, AbortRegistration) {
        let (inner, registration) = AbortHandle::new_pair();
        (Self { inner }, registration)
    }

    /// Signal the paired future to stop. Idempotent, and a no-op once the
    /// future has already completed.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_aborted()
    }
}
