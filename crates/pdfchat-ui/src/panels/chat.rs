//! Chat panel: conversation, staged-file chip, and draft input.

use egui::text::{CCursor, CCursorRange};
use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use pdfchat_core::keys::KeyInput;
use pdfchat_core::session::SessionEvent;
use pdfchat_types::error::AlertKind;
use pdfchat_types::message::Message;
use pdfchat_types::upload::{SelectedFile, UploadStatus};

use crate::state::UiState;
use crate::theme::*;

const INPUT_ID: &str = "chat_input";

/// Render the chat panel. Returns the session events triggered this frame.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, state, &mut events);
                ui.separator();

                if let Some(alert) = state.alert.clone() {
                    let color = match alert.kind {
                        AlertKind::Validation => WARNING,
                        AlertKind::Transport => ERROR,
                    };
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&alert.message).color(color));
                        if ui.small_button("✕").clicked() {
                            state.dismiss_alert();
                        }
                    });
                    ui.add_space(4.0);
                }

                let input_height = if state.staged_file.is_some() { 120.0 } else { 80.0 };
                let available_height = ui.available_height() - input_height;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.messages.is_empty() {
                            ui.add_space(available_height / 3.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Hello, Upload your PDF to chat")
                                        .color(ACCENT)
                                        .size(22.0)
                                        .strong(),
                                );
                                ui.label(
                                    RichText::new("Drop a PDF anywhere on this page")
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            });
                        }
                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);
                input_area(ui, state, &mut events);
            });
        });

    events
}

fn header(ui: &mut egui::Ui, state: &UiState, events: &mut Vec<SessionEvent>) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Ask Hub").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("New chat").clicked() {
                events.push(SessionEvent::NewSession);
            }
            let status_color = match state.upload_status {
                UploadStatus::Uploading => WARNING,
                UploadStatus::Sent => SUCCESS,
                UploadStatus::Idle => TEXT_SECONDARY,
            };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
        });
    });
}

fn input_area(ui: &mut egui::Ui, state: &mut UiState, events: &mut Vec<SessionEvent>) {
    let input_id = egui::Id::new(INPUT_ID);

    // Claim Enter before the text widget sees it. Shift is checked first
    // because an unmodified pattern also matches Shift+Enter.
    let mut key = None;
    if ui.memory(|m| m.has_focus(input_id)) {
        if ui.input_mut(|i| i.consume_key(egui::Modifiers::SHIFT, egui::Key::Enter)) {
            key = Some(match caret(ui.ctx(), input_id) {
                Some(at) => {
                    // The draft comes back with the newline next frame.
                    place_caret(ui.ctx(), input_id, at + 1);
                    KeyInput::shift_enter().at(at)
                }
                None => KeyInput::shift_enter(),
            });
        } else if ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)) {
            key = Some(KeyInput::enter());
        }
    }
    let busy = state.is_busy();

    egui::Frame::default()
        .fill(ACCENT_DARK.linear_multiply(0.35))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            if let Some(name) = state.staged_file.clone() {
                ui.horizontal(|ui| {
                    egui::Frame::default()
                        .fill(FILE_CHIP)
                        .corner_radius(BUBBLE_ROUNDING)
                        .inner_margin(4.0)
                        .show(ui, |ui| {
                            if busy {
                                ui.add(egui::Spinner::new().size(14.0).color(TEXT_PRIMARY));
                            } else {
                                ui.label(RichText::new("PDF").color(TEXT_PRIMARY).small().strong());
                            }
                        });
                    ui.label(RichText::new(&name).color(TEXT_PRIMARY));
                    if ui.small_button("✕").on_hover_text("Remove file").clicked() {
                        events.push(SessionEvent::RemoveFile);
                    }
                });
            }

            ui.horizontal(|ui| {
                let input = egui::TextEdit::multiline(&mut state.draft)
                    .id(input_id)
                    .hint_text("Ask Hub (Enter to send, Shift+Enter for newline)")
                    .desired_rows(2)
                    .desired_width(ui.available_width() - 70.0)
                    .font(egui::FontId::proportional(14.0));
                let response = ui.add_enabled(!busy, input);
                if response.changed() {
                    events.push(SessionEvent::UpdateDraft(state.draft.clone()));
                }

                let send_enabled = state.can_send();
                let send_btn = ui.add_enabled(
                    send_enabled,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(BUBBLE_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                );
                if send_btn.clicked() {
                    events.push(SessionEvent::Submit);
                }
            });
        });

    if let Some(key) = key {
        events.push(SessionEvent::Key(key));
    }
}

/// Char index of the caret in the text edit `id`, if it has one.
fn caret(ctx: &egui::Context, id: egui::Id) -> Option<usize> {
    egui::text_edit::TextEditState::load(ctx, id)
        .and_then(|s| s.cursor.char_range())
        .map(|range| range.primary.index)
}

fn place_caret(ctx: &egui::Context, id: egui::Id, index: usize) {
    if let Some(mut edit) = egui::text_edit::TextEditState::load(ctx, id) {
        edit.cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(index))));
        edit.store(ctx, id);
    }
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    if message.file_name.is_some() || message.user_text.is_some() {
        ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
            egui::Frame::default()
                .fill(ACCENT_DARK)
                .corner_radius(BUBBLE_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.vertical(|ui| {
                        if let Some(name) = &message.file_name {
                            ui.label(RichText::new(format!("PDF: {}", name)).color(TEXT_PRIMARY).strong());
                        }
                        if let Some(text) = &message.user_text {
                            ui.label(RichText::new(text).color(TEXT_PRIMARY));
                        }
                    });
                });
        });
    }

    if let Some(reply) = &message.bot_text {
        ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
            egui::Frame::default()
                .fill(BG_SURFACE)
                .corner_radius(BUBBLE_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.label(RichText::new(reply).color(TEXT_PRIMARY));
                });
        });
    }
}

/// Collect files dropped onto the canvas this frame.
pub fn take_dropped_files(ctx: &egui::Context) -> Option<Vec<SelectedFile>> {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.is_empty() {
        return None;
    }

    let files = dropped
        .into_iter()
        .filter_map(|f| match f.bytes {
            Some(bytes) => Some(SelectedFile::new(f.name, f.mime, bytes)),
            None => {
                log::warn!("dropped file {} has no contents, skipping", f.name);
                None
            }
        })
        .collect();
    Some(files)
}

/// Overlay hint while files are dragged over the window.
pub fn drop_hint(ctx: &egui::Context) {
    if ctx.input(|i| i.raw.hovered_files.is_empty()) {
        return;
    }
    let screen = ctx.content_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("drop_hint"),
    ));
    painter.rect_filled(screen, 0.0, BG_SECONDARY.gamma_multiply(0.8));
    painter.text(
        screen.center(),
        egui::Align2::CENTER_CENTER,
        "Drop your PDF to upload",
        egui::FontId::proportional(24.0),
        ACCENT,
    );
}
