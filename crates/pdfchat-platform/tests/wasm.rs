//! WASM-target tests for pdfchat-platform.
//!
//! Exercises multipart form construction against real browser/Node
//! `FormData` and `Blob` via `wasm-pack test --node`. No request is sent.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use pdfchat_platform::http::{build_form_data, error_detail, HttpProcessingService};
use pdfchat_types::config::ChatConfig;
use pdfchat_types::upload::{SelectedFile, PDF_MIME};

#[wasm_bindgen_test]
fn form_data_has_single_file_field() {
    let file = SelectedFile::new("report.pdf", PDF_MIME, b"%PDF-1.7 body".to_vec());
    let form = build_form_data(&file).unwrap();

    assert!(form.has("file"));
    let entries = form.get_all("file");
    assert_eq!(entries.length(), 1);

    let blob: web_sys::Blob = form.get("file").dyn_into().unwrap();
    assert_eq!(blob.size() as usize, file.size());
    assert_eq!(blob.type_(), PDF_MIME);
}

#[wasm_bindgen_test]
fn form_data_accepts_empty_file() {
    let file = SelectedFile::new("empty.pdf", PDF_MIME, Vec::new());
    let form = build_form_data(&file).unwrap();
    assert!(form.has("file"));
}

#[wasm_bindgen_test]
fn service_uses_configured_endpoints() {
    let service = HttpProcessingService::new(
        ChatConfig::default().with_api_base("https://docs.example.com"),
    );
    assert_eq!(
        service.config().process_url(),
        "https://docs.example.com/process-pdf/"
    );
}

#[wasm_bindgen_test]
fn error_detail_from_fastapi_body() {
    assert_eq!(error_detail(413, r#"{"detail":"file too large"}"#), "file too large");
}
