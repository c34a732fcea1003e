//! PDF chat app: WASM entry point.
//!
//! Composition root. Builds the HTTP processing adapter and the browser
//! spawner, hands them to the session runtime, and mounts the egui chat
//! panel on the `pdfchat_canvas` element. Builds to an empty library off wasm32.

#![cfg(target_arch = "wasm32")]

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "pdfchat_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("PDF chat starting...");

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .unwrap_or_else(|| panic!("No canvas element with id '{}'", CANVAS_ID))
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::PdfChatApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
