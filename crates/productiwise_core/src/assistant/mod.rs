//! AI assistant bridge.
//!
//! # Responsibility
//! - Hold one lazily opened chat session against the generative-AI service.
//! - Turn image/audio clips into task fields via structured extraction.
//!
//! # Invariants
//! - The service is treated as an opaque request/response boundary
//!   (`GenerativeModel`); transport lives in `gemini`.
//! - Chat failures become a fallback model turn; extraction failures
//!   propagate to the caller.
//! - Missing credentials fail at first use, not at construction.

pub mod bridge;
pub mod client;
pub mod extract;
pub mod gemini;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use bridge::{AssistantBridge, BridgeState, CHAT_FALLBACK_REPLY, CHAT_GREETING};
pub use client::{GenerateRequest, GenerativeModel, ModelConnector, Part};
pub use extract::{ExtractedTask, MediaKind, MediaPayload};
pub use gemini::GeminiClient;

pub type AssistantResult<T> = Result<T, AssistantError>;

#[derive(Debug)]
pub enum AssistantError {
    /// No API key configured. Fatal for the assistant.
    MissingApiKey,
    /// Chat input was empty after trimming.
    EmptyMessage,
    /// Media payload does not match the requested extraction kind.
    UnsupportedMedia { expected: MediaKind, mime_type: String },
    /// Transport-level failure.
    Http(reqwest::Error),
    /// Service answered with a non-success status.
    Api { status: u16, message: String },
    /// Service answered without any text.
    EmptyResponse,
    /// Structured output could not be turned into task fields.
    InvalidExtraction(String),
}

impl Display for AssistantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(
                f,
                "{} is not set in environment variables",
                crate::config::API_KEY_ENV
            ),
            Self::EmptyMessage => write!(f, "chat message cannot be empty"),
            Self::UnsupportedMedia {
                expected,
                mime_type,
            } => write!(
                f,
                "expected {} media, got mime type `{mime_type}`",
                expected.as_str()
            ),
            Self::Http(err) => write!(f, "{err}"),
            Self::Api { status, message } => {
                write!(f, "generative AI request failed with status {status}: {message}")
            }
            Self::EmptyResponse => write!(f, "generative AI response contained no text"),
            Self::InvalidExtraction(details) => write!(f, "invalid task extraction: {details}"),
        }
    }
}

impl Error for AssistantError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}
