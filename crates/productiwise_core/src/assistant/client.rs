//! Service boundary for generative-AI calls.

use super::extract::MediaPayload;
use super::AssistantResult;
use crate::config::AssistantConfig;
use crate::model::chat::ChatMessage;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// One piece of the new user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Media(MediaPayload),
}

/// A single generate call: prior turns plus the new user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: Option<String>,
    pub history: Vec<ChatMessage>,
    pub parts: Vec<Part>,
    /// When set, the service must answer with JSON matching this schema.
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    /// Chat continuation with free-text output.
    pub fn chat(
        system_instruction: impl Into<String>,
        history: Vec<ChatMessage>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            system_instruction: Some(system_instruction.into()),
            history,
            parts: vec![Part::Text(message.into())],
            response_schema: None,
        }
    }

    /// History-free request constrained to `schema`.
    pub fn structured(parts: Vec<Part>, schema: Value) -> Self {
        Self {
            system_instruction: None,
            history: Vec::new(),
            parts,
            response_schema: Some(schema),
        }
    }
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model identifier used for diagnostics.
    fn model_id(&self) -> &str;

    /// Sends one request and returns the response text (JSON text for
    /// structured requests).
    async fn generate(&self, request: GenerateRequest) -> AssistantResult<String>;
}

/// Opens a model handle on first use.
pub trait ModelConnector: Send + Sync {
    fn connect(&self) -> AssistantResult<Arc<dyn GenerativeModel>>;
}

impl ModelConnector for AssistantConfig {
    fn connect(&self) -> AssistantResult<Arc<dyn GenerativeModel>> {
        let client = super::gemini::GeminiClient::from_config(self)?;
        Ok(Arc::new(client))
    }
}
