//! Assistant configuration.
//!
//! # Responsibility
//! - Collect everything needed to reach the generative-AI service.
//! - Read overrides from the process environment.
//!
//! # Invariants
//! - A missing API key is carried as `None`; it only becomes an error when the
//!   assistant is first used.
//! - `base_url` never ends with `/`.

use std::env;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "API_KEY";
/// Optional model override.
pub const MODEL_ENV: &str = "PRODUCTIWISE_MODEL";
/// Optional endpoint override, e.g. for a local proxy.
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are Productiwise AI, a friendly and insightful \
productivity assistant. You are integrated into a productivity app that helps users manage tasks, \
track habits, and achieve their goals. Your responses should be encouraging, concise, and helpful. \
You can help users break down tasks, suggest new habits, and provide motivation. Keep your answers \
brief and to the point unless asked for more detail. Use markdown for formatting.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub system_instruction: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Builds config from `API_KEY`, `PRODUCTIWISE_MODEL` and `GEMINI_BASE_URL`.
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, with a caller-supplied variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: read(API_KEY_ENV),
            model: read(MODEL_ENV).unwrap_or(defaults.model),
            base_url: read(BASE_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            system_instruction: defaults.system_instruction,
        }
    }

    /// Overrides the key read from the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AssistantConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
    use std::collections::HashMap;

    #[test]
    fn lookup_defaults_when_unset() {
        let config = AssistantConfig::from_lookup(|_| None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn lookup_trims_and_ignores_blank_values() {
        let vars = HashMap::from([
            ("API_KEY", "  secret  "),
            ("PRODUCTIWISE_MODEL", "   "),
            ("GEMINI_BASE_URL", "http://localhost:8080/v1beta/"),
        ]);
        let config =
            AssistantConfig::from_lookup(|name| vars.get(name).map(|value| value.to_string()));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    }
}
