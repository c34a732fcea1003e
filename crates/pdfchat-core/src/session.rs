//! Upload/chat session controller.
//!
//! `Session` owns all state of one conversation and is driven by
//! `Session::apply`, which maps a `SessionEvent` to a new state plus a list of
//! `Effect`s for the runtime to execute. Nothing here performs I/O, so every
//! transition can be tested without a browser or a backend.
//!
//! Upload lifecycle:
//! 1. `Idle` --select PDF--> `Uploading` (emits `Effect::Upload`)
//! 2. `Uploading` --accepted--> `Sent`
//! 3. `Uploading` --failed / cancelled--> `Idle`
//! 4. `Sent` --remove--> `Idle` (emits `Effect::NotifyCancel`)
//! 5. `Sent` --submit--> `Idle`, file recorded on the appended message
//! 6. any --new session--> `Idle`, history cleared

use futures::future::AbortRegistration;
use pdfchat_types::{
    ChatError,
    config::ChatConfig,
    event::ChatEvent,
    message::Message,
    upload::{SelectedFile, UploadStatus},
};

use crate::cancel::CancelHandle;
use crate::keys::{self, KeyAction, KeyInput};

/// Every input the controller reacts to.
#[derive(Debug)]
pub enum SessionEvent {
    /// Files picked or dropped by the user
    SelectFiles(Vec<SelectedFile>),
    RemoveFile,
    /// Replace the draft verbatim
    UpdateDraft(String),
    /// Newline at char position `at`, or at the end when `None`
    InsertNewline { at: Option<usize> },
    Key(KeyInput),
    Submit,
    NewSession,
    /// Completion of the upload identified by `request_id`
    UploadFinished { request_id: u64, outcome: UploadOutcome },
}

/// How an upload request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted,
    Failed(ChatError),
    Cancelled,
}

/// Work requested by a transition.
#[derive(Debug)]
pub enum Effect {
    /// POST the file to the processing endpoint, abortable via `registration`
    Upload {
        request_id: u64,
        file: SelectedFile,
        registration: AbortRegistration,
    },
    /// Fire-and-forget cancel notice; its outcome never touches the session
    NotifyCancel { file_name: String },
    Publish(ChatEvent),
}

struct StagedFile {
    name: String,
    request_id: u64,
    /// Present only while the upload request is outstanding
    cancel: Option<CancelHandle>,
}

pub struct Session {
    id: String,
    started_at: String,
    messages: Vec<Message>,
    staged: Option<StagedFile>,
    status: UploadStatus,
    input_text: String,
    placeholder_reply: String,
    request_counter: u64,
}

impl Session {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            id: new_session_id(),
            started_at: chrono::Utc::now().to_rfc3339(),
            messages: Vec::new(),
            staged: None,
            status: UploadStatus::Idle,
            input_text: String::new(),
            placeholder_reply: config.placeholder_reply.clone(),
            request_counter: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn upload_status(&self) -> UploadStatus {
        self.status
    }

    /// Name of the staged file that has not yet been sent in a message
    pub fn uploaded_file_name(&self) -> Option<&str> {
        self.staged.as_ref().map(|s| s.name.as_str())
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn has_pending_request(&self) -> bool {
        self.staged.as_ref().is_some_and(|s| s.cancel.is_some())
    }

    /// A PDF has already been sent in this conversation.
    pub fn has_committed_pdf(&self) -> bool {
        self.messages.iter().any(Message::has_file)
    }

    /// Apply one event and return the effects to run.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::SelectFiles(files) => self.select_files(files),
            SessionEvent::RemoveFile => self.remove_file(),
            SessionEvent::UpdateDraft(text) => self.update_draft(text),
            SessionEvent::InsertNewline { at } => self.insert_newline(at),
            SessionEvent::Key(input) => self.handle_key(input),
            SessionEvent::Submit => self.submit(),
            SessionEvent::NewSession => self.new_session(),
            SessionEvent::UploadFinished { request_id, outcome } => {
                self.finish_upload(request_id, outcome)
            }
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) -> Vec<Effect> {
        self.select_files(vec![file])
    }

    pub fn select_files(&mut self, mut files: Vec<SelectedFile>) -> Vec<Effect> {
        let file = match files.len() {
            0 => return reject(ChatError::NoFile),
            1 => files.remove(0),
            n => return reject(ChatError::MultipleFiles(n)),
        };

        if self.has_committed_pdf() {
            return reject(ChatError::OnePdfPerChat);
        }
        match (self.status, &self.staged) {
            (UploadStatus::Uploading, Some(staged)) => {
                return reject(ChatError::UploadInProgress(staged.name.clone()));
            }
            (UploadStatus::Sent, _) => return reject(ChatError::OnePdfPerChat),
            _ => {}
        }
        if !file.is_pdf() {
            return reject(ChatError::NotPdf {
                file_name: file.name,
                mime_type: file.mime_type,
            });
        }

        self.request_counter += 1;
        let request_id = self.request_counter;
        let (cancel, registration) = CancelHandle::new_pair();

        log::info!(
            "[{}] uploading {} ({} bytes), request {}",
            self.id,
            file.name,
            file.size(),
            request_id
        );

        self.staged = Some(StagedFile {
            name: file.name.clone(),
            request_id,
            cancel: Some(cancel),
        });
        self.status = UploadStatus::Uploading;

        vec![
            self.status_event(),
            Effect::Upload {
                request_id,
                file,
                registration,
            },
        ]
    }

    /// Drop the staged file whatever its state, aborting any request in flight.
    pub fn remove_file(&mut self) -> Vec<Effect> {
        let Some(staged) = self.staged.take() else {
            self.status = UploadStatus::Idle;
            return Vec::new();
        };

        if let Some(cancel) = staged.cancel {
            cancel.cancel();
        }
        self.status = UploadStatus::Idle;
        log::info!("[{}] removed staged file {}", self.id, staged.name);

        // Local reset is published before the remote notice goes out.
        vec![
            self.status_event(),
            Effect::NotifyCancel {
                file_name: staged.name,
            },
        ]
    }

    pub fn update_draft(&mut self, text: String) -> Vec<Effect> {
        self.input_text = text;
        Vec::new()
    }

    /// Insert a newline at char position `at` (clamped), or at the end.
    pub fn insert_newline(&mut self, at: Option<usize>) -> Vec<Effect> {
        let offset = at
            .and_then(|caret| self.input_text.char_indices().nth(caret))
            .map_or(self.input_text.len(), |(offset, _)| offset);
        self.input_text.insert(offset, '\n');
        vec![self.draft_event()]
    }

    fn handle_key(&mut self, input: KeyInput) -> Vec<Effect> {
        match keys::classify(input) {
            KeyAction::Submit => self.submit(),
            KeyAction::InsertNewline(at) => self.insert_newline(at),
            KeyAction::Ignore => Vec::new(),
        }
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        if let (UploadStatus::Uploading, Some(staged)) = (self.status, &self.staged) {
            return reject(ChatError::UploadPending(staged.name.clone()));
        }

        let sent_file = match self.status {
            UploadStatus::Sent => self.staged.as_ref().map(|s| s.name.clone()),
            _ => None,
        };
        let text = self.input_text.trim();

        if sent_file.is_none() && text.is_empty() {
            log::debug!("[{}] ignoring empty submit", self.id);
            return Vec::new();
        }

        let user_text = (!text.is_empty()).then(|| text.to_string());
        let message = Message::exchange(sent_file.clone(), user_text, self.placeholder_reply.clone());
        self.messages.push(message.clone());
        self.input_text.clear();

        let mut effects = vec![
            Effect::Publish(ChatEvent::MessageAppended { message }),
            self.draft_event(),
        ];
        if sent_file.is_some() {
            self.staged = None;
            self.status = UploadStatus::Idle;
            effects.push(self.status_event());
        }
        effects
    }

    /// Start over: clear history, draft and staged file, abort any upload.
    pub fn new_session(&mut self) -> Vec<Effect> {
        let in_flight = self.staged.take().and_then(|staged| {
            staged.cancel.map(|cancel| {
                cancel.cancel();
                staged.name
            })
        });

        let previous = std::mem::replace(&mut self.id, new_session_id());
        log::info!(
            "[{}] session reset ({} messages discarded), new session {}",
            previous,
            self.messages.len(),
            self.id
        );

        self.started_at = chrono::Utc::now().to_rfc3339();
        self.messages.clear();
        self.input_text.clear();
        self.status = UploadStatus::Idle;

        let mut effects = vec![
            Effect::Publish(ChatEvent::SessionReset {
                session_id: self.id.clone(),
            }),
            self.status_event(),
            self.draft_event(),
        ];
        if let Some(file_name) = in_flight {
            effects.push(Effect::NotifyCancel { file_name });
        }
        effects
    }

    pub fn finish_upload(&mut self, request_id: u64, outcome: UploadOutcome) -> Vec<Effect> {
        let current = self
            .staged
            .as_ref()
            .is_some_and(|s| s.request_id == request_id && s.cancel.is_some());
        if !current || self.status != UploadStatus::Uploading {
            log::debug!("[{}] dropping stale completion of request {}", self.id, request_id);
            return Vec::new();
        }

        let outcome = match outcome {
            UploadOutcome::Failed(e) if e.is_cancellation() => UploadOutcome::Cancelled,
            other => other,
        };

        match outcome {
            UploadOutcome::Accepted => {
                if let Some(staged) = self.staged.as_mut() {
                    staged.cancel = None;
                    log::info!("[{}] {} accepted by backend", self.id, staged.name);
                }
                self.status = UploadStatus::Sent;
                vec![self.status_event()]
            }
            UploadOutcome::Cancelled => {
                self.staged = None;
                self.status = UploadStatus::Idle;
                log::info!("[{}] upload {} cancelled", self.id, request_id);
                vec![self.status_event()]
            }
            UploadOutcome::Failed(error) => {
                let file_name = self.staged.take().map(|s| s.name).unwrap_or_default();
                self.status = UploadStatus::Idle;
                log::warn!("[{}] upload of {} failed: {}", self.id, file_name, error);

                let message = error.to_string();
                vec![
                    self.status_event(),
                    Effect::Publish(ChatEvent::UploadFailed {
                        file_name,
                        message: message.clone(),
                    }),
                    Effect::Publish(ChatEvent::Alert {
                        kind: error.kind(),
                        message,
                    }),
                ]
            }
        }
    }

    fn status_event(&self) -> Effect {
        Effect::Publish(ChatEvent::UploadStatusChanged {
            status: self.status,
            file_name: self.uploaded_file_name().map(String::from),
        })
    }

    fn draft_event(&self) -> Effect {
        Effect::Publish(ChatEvent::DraftChanged {
            text: self.input_text.clone(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

/// Functional form of `Session::apply`: `(state, event) -> (state, effects)`.
pub fn reduce(mut session: Session, event: SessionEvent) -> (Session, Vec<Effect>) {
    let effects = session.apply(event);
    (session, effects)
}

fn reject(error: ChatError) -> Vec<Effect> {
    log::warn!("rejected: {}", error);
    vec![Effect::Publish(ChatEvent::Alert {
        kind: error.kind(),
        message: error.to_string(),
    })]
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
