//! HTTP adapter for the document-processing service.
//!
//! Uses browser `fetch()` via gloo-net. The upload is sent as multipart form
//! data with a single `file` field; each request carries an `AbortSignal`
//! that fires when the request future is dropped, so aborting the upload in
//! the runtime also stops the network transfer.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, Blob, BlobPropertyBag, FormData};

use pdfchat_core::ports::ProcessingPort;
use pdfchat_types::{
    ChatError, Result,
    config::ChatConfig,
    upload::{CancelRequest, SelectedFile},
};

/// Talks to `POST /process-pdf/` and `POST /cancel-processing/`.
pub struct HttpProcessingService {
    config: ChatConfig,
}

impl HttpProcessingService {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ProcessingPort for HttpProcessingService {
    async fn process_pdf(&self, file: &SelectedFile) -> Result<()> {
        let url = self.config.process_url();
        let form = build_form_data(file)?;
        let abort = AbortOnDrop::new()?;

        let response = Request::post(&url)
            .abort_signal(Some(&abort.signal()))
            .body(form)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        check_response(response).await?;
        log::info!("{} accepted by {}", file.name, url);
        Ok(())
    }

    async fn cancel_processing(&self, file_name: &str) -> Result<()> {
        let body = CancelRequest {
            filename: file_name.to_string(),
        };

        let response = Request::post(&self.config.cancel_url())
            .json(&body)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        check_response(response).await
    }
}

async fn check_response(response: Response) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ChatError::Backend {
        status,
        detail: error_detail(status, &body),
    })
}

/// Build the multipart body: one `file` field holding the PDF.
pub fn build_form_data(file: &SelectedFile) -> Result<FormData> {
    let bytes = js_sys::Uint8Array::from(&file.bytes[..]);
    let parts = js_sys::Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}

// ─── Error body parsing ──────────────────────────────────────

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Extract a user-facing message from a non-success response body.
///
/// Prefers `detail` (FastAPI's `HTTPException`), then `error`, then the raw
/// body, then the bare status code.
pub fn error_detail(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.error));

    match parsed {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("HTTP {}", status),
    }
}

// ─── Abort guard ─────────────────────────────────────────────

/// Aborts the fetch when dropped. A no-op once the response has been read.
struct AbortOnDrop(AbortController);

impl AbortOnDrop {
    fn new() -> Result<Self> {
        AbortController::new().map(Self).map_err(js_error)
    }

    fn signal(&self) -> AbortSignal {
        self.0.signal()
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn js_error(e: JsValue) -> ChatError {
    ChatError::JsInterop(format!("{:?}", e))
}
