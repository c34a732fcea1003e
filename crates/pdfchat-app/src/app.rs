//! Main egui application: forwards panel input to the session runtime and
//! projects published events back into the UI.

use std::rc::Rc;

use egui::{self, CentralPanel};

use pdfchat_core::event_bus::EventBus;
use pdfchat_core::runtime::ChatRuntime;
use pdfchat_core::session::SessionEvent;
use pdfchat_platform::{HttpProcessingService, LocalSpawner};
use pdfchat_types::config::ChatConfig;
use pdfchat_ui::panels::chat;
use pdfchat_ui::state::UiState;
use pdfchat_ui::theme;

/// The main application state
pub struct PdfChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    runtime: ChatRuntime,
    first_frame: bool,
}

impl PdfChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config();
        log::info!("processing service at {}", config.api_base);

        let event_bus = EventBus::new();
        let runtime = ChatRuntime::new(
            &config,
            Rc::new(HttpProcessingService::new(config.clone())),
            Rc::new(LocalSpawner),
            event_bus.clone(),
        );

        Self {
            ui_state: UiState::new(),
            event_bus,
            runtime,
            first_frame: true,
        }
    }

    fn dispatch_all(&self, events: Vec<SessionEvent>, ctx: &egui::Context) {
        if events.is_empty() {
            return;
        }
        for event in events {
            self.runtime.dispatch(event);
        }
        ctx.request_repaint();
    }
}

/// Default config, with the backend address overridable at build time.
fn load_config() -> ChatConfig {
    match option_env!("PDFCHAT_API_BASE") {
        Some(base) if !base.trim().is_empty() => ChatConfig::default().with_api_base(base),
        _ => ChatConfig::default(),
    }
}

impl eframe::App for PdfChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events published by the session
        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        // Keep polling until the upload completes
        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        if let Some(files) = chat::take_dropped_files(ctx) {
            self.dispatch_all(vec![SessionEvent::SelectFiles(files)], ctx);
        }
        chat::drop_hint(ctx);

        let mut panel_events = Vec::new();
        CentralPanel::default().show(ctx, |ui| {
            panel_events = chat::chat_panel(ui, &mut self.ui_state);
        });
        self.dispatch_all(panel_events, ctx);
    }
}
