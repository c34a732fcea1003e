#[cfg(test)]
mod tests {
    use crate::panels::chat::chat_panel;
    use crate::state::*;
    use pdfchat_core::session::SessionEvent;
    use pdfchat_types::error::AlertKind;
    use pdfchat_types::event::ChatEvent;
    use pdfchat_types::message::Message;
    use pdfchat_types::upload::UploadStatus;

    fn status(status: UploadStatus, file_name: Option<&str>) -> ChatEvent {
        ChatEvent::UploadStatusChanged {
            status,
            file_name: file_name.map(str::to_string),
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.messages.is_empty());
        assert_eq!(state.upload_status, UploadStatus::Idle);
        assert!(state.staged_file.is_none());
        assert!(state.draft.is_empty());
        assert!(state.alert.is_none());
        assert_eq!(state.status_text, "Ready");
        assert!(!state.is_busy());
        assert!(!state.can_send());
    }

    #[test]
    fn test_ui_state_uploading() {
        let mut state = UiState::new();
        state.process_events(vec![status(UploadStatus::Uploading, Some("report.pdf"))]);

        assert_eq!(state.upload_status, UploadStatus::Uploading);
        assert_eq!(state.staged_file.as_deref(), Some("report.pdf"));
        assert_eq!(state.status_text, "Processing report.pdf...");
        assert!(state.is_busy());
    }

    #[test]
    fn test_ui_state_sent() {
        let mut state = UiState::new();
        state.process_events(vec![
            status(UploadStatus::Uploading, Some("report.pdf")),
            status(UploadStatus::Sent, Some("report.pdf")),
        ]);

        assert_eq!(state.upload_status, UploadStatus::Sent);
        assert_eq!(state.status_text, "report.pdf ready");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_back_to_idle_clears_chip() {
        let mut state = UiState::new();
        state.process_events(vec![
            status(UploadStatus::Uploading, Some("report.pdf")),
            status(UploadStatus::Idle, None),
        ]);

        assert!(state.staged_file.is_none());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_upload_failed() {
        let mut state = UiState::new();
        state.process_events(vec![
            status(UploadStatus::Uploading, Some("huge.pdf")),
            status(UploadStatus::Idle, None),
            ChatEvent::UploadFailed {
                file_name: "huge.pdf".to_string(),
                message: "Upload failed: file too large".to_string(),
            },
            ChatEvent::Alert {
                kind: AlertKind::Transport,
                message: "Upload failed: file too large".to_string(),
            },
        ]);

        assert_eq!(state.status_text, "huge.pdf was not processed");
        assert!(state.staged_file.is_none());
        let alert = state.alert.as_ref().unwrap();
        assert_eq!(alert.kind, AlertKind::Transport);
        assert_eq!(alert.message, "Upload failed: file too large");
    }

    #[test]
    fn test_ui_state_message_appended() {
        let mut state = UiState::new();
        state.draft = "what is this about?".to_string();
        state.process_events(vec![
            ChatEvent::MessageAppended {
                message: Message::exchange(
                    Some("report.pdf".to_string()),
                    Some("what is this about?".to_string()),
                    "Backend not connected",
                ),
            },
            ChatEvent::DraftChanged {
                text: String::new(),
            },
        ]);

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].file_name.as_deref(), Some("report.pdf"));
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_ui_state_draft_newline() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::DraftChanged {
            text: "line one\n".to_string(),
        }]);
        assert_eq!(state.draft, "line one\n");
    }

    #[test]
    fn test_ui_state_alert_replaced_and_dismissed() {
        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::Alert {
                kind: AlertKind::Validation,
                message: "Only PDF files are allowed! (notes.txt)".to_string(),
            },
            ChatEvent::Alert {
                kind: AlertKind::Validation,
                message: "Only one PDF can be uploaded per chat".to_string(),
            },
        ]);
        assert_eq!(
            state.alert.as_ref().map(|a| a.message.as_str()),
            Some("Only one PDF can be uploaded per chat")
        );

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_ui_state_session_reset() {
        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::MessageAppended {
                message: Message::exchange(None, Some("hi".to_string()), "Backend not connected"),
            },
            ChatEvent::Alert {
                kind: AlertKind::Validation,
                message: "x".to_string(),
            },
            ChatEvent::SessionReset {
                session_id: "abc".to_string(),
            },
            status(UploadStatus::Idle, None),
            ChatEvent::DraftChanged {
                text: String::new(),
            },
        ]);

        assert!(state.messages.is_empty());
        assert!(state.alert.is_none());
        assert!(state.draft.is_empty());
        assert_eq!(state.upload_status, UploadStatus::Idle);
    }

    #[test]
    fn test_ui_state_can_send() {
        let mut state = UiState::new();
        state.draft = "   ".to_string();
        assert!(!state.can_send());

        state.draft = "hello".to_string();
        assert!(state.can_send());

        state.process_events(vec![status(UploadStatus::Uploading, Some("a.pdf"))]);
        assert!(!state.can_send());

        state.draft.clear();
        state.process_events(vec![status(UploadStatus::Sent, Some("a.pdf"))]);
        assert!(state.can_send());
    }

    #[test]
    fn test_ui_state_default_matches_new() {
        let state = UiState::default();
        assert_eq!(state.status_text, UiState::new().status_text);
        assert!(state.messages.is_empty());
    }

    // ─── Chat Panel Tests ────────────────────────────────────

    fn render(state: &mut UiState) -> Vec<SessionEvent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = chat_panel(ui, state);
            });
        });
        events
    }

    #[test]
    fn test_chat_panel_renders_while_uploading() {
        let mut state = UiState::new();
        state.draft = "half typed".to_string();
        state.process_events(vec![status(UploadStatus::Uploading, Some("report.pdf"))]);

        let events = render(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.draft, "half typed");
        assert!(state.is_busy());
    }

    #[test]
    fn test_chat_panel_renders_history_and_alert() {
        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::MessageAppended {
                message: Message::exchange(
                    Some("report.pdf".to_string()),
                    Some("Summarize page 1".to_string()),
                    "Backend not connected",
                ),
            },
            ChatEvent::Alert {
                kind: AlertKind::Validation,
                message: "Only one PDF can be uploaded per chat".to_string(),
            },
        ]);

        assert!(render(&mut state).is_empty());
        assert_eq!(state.messages.len(), 1);
        assert!(state.alert.is_some());
    }
}
