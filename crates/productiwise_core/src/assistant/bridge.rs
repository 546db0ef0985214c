//! Chat session state machine.
//!
//! # Responsibility
//! - Open the model handle lazily (`Idle -> Active`) on first use.
//! - Keep the append-only transcript of the active session.
//!
//! # Invariants
//! - Every operation takes `&mut self`, so at most one service call is in
//!   flight per bridge.
//! - A completed `send_message` appends exactly two turns: user then model.
//! - Activation failure leaves the bridge `Idle` and the transcript untouched.

use super::client::{GenerateRequest, GenerativeModel, ModelConnector};
use super::extract::{extraction_parts, task_schema, ExtractedTask, MediaKind, MediaPayload};
use super::{AssistantError, AssistantResult};
use crate::config::AssistantConfig;
use crate::model::chat::ChatMessage;
use log::{info, warn};
use std::sync::Arc;

/// Shown above the transcript before the user says anything.
pub const CHAT_GREETING: &str =
    "Hello! I'm Productiwise AI. How can I help you be more productive today?";

/// Model turn recorded when a chat call fails.
pub const CHAT_FALLBACK_REPLY: &str = "I'm sorry, I encountered an error. Please try again.";

/// Lifecycle of the chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    Active,
}

struct ActiveSession {
    model: Arc<dyn GenerativeModel>,
    history: Vec<ChatMessage>,
}

pub struct AssistantBridge {
    connector: Box<dyn ModelConnector>,
    system_instruction: String,
    session: Option<ActiveSession>,
}

impl AssistantBridge {
    /// Idle bridge that connects through `connector` on first use.
    pub fn new(connector: Box<dyn ModelConnector>, system_instruction: impl Into<String>) -> Self {
        Self {
            connector,
            system_instruction: system_instruction.into(),
            session: None,
        }
    }

    /// Bridge backed by the Gemini client described by `config`.
    pub fn from_config(config: AssistantConfig) -> Self {
        let system_instruction = config.system_instruction.clone();
        Self::new(Box::new(config), system_instruction)
    }

    /// Whether a model session has been opened.
    pub fn state(&self) -> BridgeState {
        match self.session {
            Some(_) => BridgeState::Active,
            None => BridgeState::Idle,
        }
    }

    /// Transcript of the active session; empty while idle.
    pub fn history(&self) -> &[ChatMessage] {
        self.session
            .as_ref()
            .map(|session| session.history.as_slice())
            .unwrap_or(&[])
    }

    /// Sends one user message, records the model reply and returns it.
    ///
    /// Service failures are recorded as `CHAT_FALLBACK_REPLY` and still return
    /// `Ok`. Only empty input and activation failures return `Err`.
    pub async fn send_message(&mut self, text: &str) -> AssistantResult<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let system_instruction = self.system_instruction.clone();
        let session = self.activate()?;
        let request = GenerateRequest::chat(system_instruction, session.history.clone(), text);
        session.history.push(ChatMessage::user(text));

        let reply = match session.model.generate(request).await {
            Ok(reply) => {
                info!(
                    "event=chat_reply module=assistant status=ok model={} turns={}",
                    session.model.model_id(),
                    session.history.len() + 1
                );
                reply
            }
            Err(err) => {
                warn!(
                    "event=chat_reply module=assistant status=error model={} error={}",
                    session.model.model_id(),
                    err
                );
                CHAT_FALLBACK_REPLY.to_string()
            }
        };

        let reply = ChatMessage::model(reply);
        session.history.push(reply.clone());
        Ok(reply)
    }

    /// Extracts task fields from an image. Errors propagate.
    pub async fn extract_task_from_image(
        &mut self,
        media: MediaPayload,
    ) -> AssistantResult<ExtractedTask> {
        self.extract_task(MediaKind::Image, media).await
    }

    /// Extracts task fields from a voice clip. Errors propagate.
    pub async fn extract_task_from_audio(
        &mut self,
        media: MediaPayload,
    ) -> AssistantResult<ExtractedTask> {
        self.extract_task(MediaKind::Audio, media).await
    }

    /// Drops the session and its transcript, returning to `Idle`.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            info!("event=chat_reset module=assistant status=ok");
        }
    }

    async fn extract_task(
        &mut self,
        kind: MediaKind,
        media: MediaPayload,
    ) -> AssistantResult<ExtractedTask> {
        media.ensure_kind(kind)?;
        let model = Arc::clone(&self.activate()?.model);
        let request = GenerateRequest::structured(extraction_parts(kind, media), task_schema());

        let result = model
            .generate(request)
            .await
            .and_then(|text| ExtractedTask::from_json(&text));
        match &result {
            Ok(_) => info!(
                "event=task_extract module=assistant status=ok kind={}",
                kind.as_str()
            ),
            Err(err) => warn!(
                "event=task_extract module=assistant status=error kind={} error={}",
                kind.as_str(),
                err
            ),
        }
        result
    }

    fn activate(&mut self) -> AssistantResult<&mut ActiveSession> {
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                let model = self.connector.connect().map_err(|err| {
                    warn!("event=chat_start module=assistant status=error error={err}");
                    err
                })?;
                info!(
                    "event=chat_start module=assistant status=ok model={}",
                    model.model_id()
                );
                ActiveSession {
                    model,
                    history: Vec::new(),
                }
            }
        };
        Ok(self.session.insert(session))
    }
}
