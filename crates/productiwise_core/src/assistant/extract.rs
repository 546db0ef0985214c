//! Structured task extraction from media clips.
//!
//! # Invariants
//! - Requests always carry `task_schema()`; `title`, `priority` and
//!   `deadline` are required.
//! - Parsed deadlines must be `YYYY-MM-DD`; priorities must name a known
//!   `Priority`.

use super::{AssistantError, AssistantResult};
use crate::model::task::{NewTask, Priority};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

pub const IMAGE_EXTRACTION_PROMPT: &str = "Extract a single actionable task from this image. \
Use a short imperative title, a one-sentence description, a priority of Low, Medium or High, \
and a deadline formatted as YYYY-MM-DD.";

pub const AUDIO_EXTRACTION_PROMPT: &str = "Listen to this voice note and extract a single \
actionable task. Use a short imperative title, a one-sentence description, a priority of Low, \
Medium or High, and a deadline formatted as YYYY-MM-DD.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Image => IMAGE_EXTRACTION_PROMPT,
            Self::Audio => AUDIO_EXTRACTION_PROMPT,
        }
    }
}

/// Inline media sent with a request; `data` is standard base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPayload {
    pub mime_type: String,
    pub data: String,
}

impl MediaPayload {
    /// Wraps data that is already base64 encoded.
    pub fn new(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64_data.into(),
        }
    }

    /// Encodes raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    pub fn kind(&self) -> Option<MediaKind> {
        let top_level = self.mime_type.split('/').next()?.trim();
        match top_level.to_ascii_lowercase().as_str() {
            "image" => Some(MediaKind::Image),
            "audio" => Some(MediaKind::Audio),
            _ => None,
        }
    }

    pub(crate) fn ensure_kind(&self, expected: MediaKind) -> AssistantResult<()> {
        if self.kind() == Some(expected) {
            return Ok(());
        }
        Err(AssistantError::UnsupportedMedia {
            expected,
            mime_type: self.mime_type.clone(),
        })
    }
}

/// Response schema for task extraction, in the service's schema dialect.
pub fn task_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "priority": { "type": "STRING", "enum": ["Low", "Medium", "High"] },
            "deadline": { "type": "STRING", "description": "Date formatted as YYYY-MM-DD" }
        },
        "required": ["title", "priority", "deadline"]
    })
}

pub(crate) fn extraction_parts(kind: MediaKind, media: MediaPayload) -> Vec<super::Part> {
    vec![
        super::Part::Media(media),
        super::Part::Text(kind.prompt().to_string()),
    ]
}

/// Task fields recovered from a media clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: NaiveDate,
}

impl ExtractedTask {
    /// Parses the JSON text returned by a structured request.
    pub fn from_json(text: &str) -> AssistantResult<Self> {
        let raw: RawExtraction = serde_json::from_str(text.trim())
            .map_err(|err| AssistantError::InvalidExtraction(err.to_string()))?;

        let title = raw.title.trim().to_string();
        if title.is_empty() {
            return Err(AssistantError::InvalidExtraction(
                "title is empty".to_string(),
            ));
        }
        let priority = Priority::parse(&raw.priority).ok_or_else(|| {
            AssistantError::InvalidExtraction(format!("unknown priority `{}`", raw.priority))
        })?;
        let deadline = NaiveDate::parse_from_str(raw.deadline.trim(), "%Y-%m-%d").map_err(|_| {
            AssistantError::InvalidExtraction(format!(
                "deadline `{}` is not YYYY-MM-DD",
                raw.deadline
            ))
        })?;

        Ok(Self {
            title,
            description: raw
                .description
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            priority,
            deadline,
        })
    }

    /// Create request ready for `AppState::add_task`.
    pub fn into_new_task(self) -> NewTask {
        NewTask {
            title: self.title,
            description: self.description,
            priority: self.priority,
            deadline: self.deadline,
            reminder: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawExtraction {
    title: String,
    #[serde(default)]
    description: Option<String>,
    priority: String,
    deadline: String,
}
