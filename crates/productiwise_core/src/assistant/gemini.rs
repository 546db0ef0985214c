//! Gemini `generateContent` transport.
//!
//! # Invariants
//! - One HTTP request per `generate` call; no retries and no client timeout.
//! - The API key travels in the `x-goog-api-key` header, never in the URL.
//! - Error bodies are logged sanitized and length-capped.

use super::client::{GenerateRequest, GenerativeModel, Part};
use super::{AssistantError, AssistantResult};
use crate::config::AssistantConfig;
use crate::logging::sanitize_message;
use crate::model::chat::ChatMessage;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Fails with `AssistantError::MissingApiKey` when no key is configured.
    pub fn from_config(config: &AssistantConfig) -> AssistantResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AssistantError::MissingApiKey)?
            .to_string();

        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: GenerateRequest) -> AssistantResult<String> {
        let body = WireRequest::from(&request);
        debug!(
            "event=generate_request module=assistant model={} turns={} structured={}",
            self.model,
            body.contents.len(),
            body.generation_config.is_some()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = sanitize_message(&message, MAX_ERROR_BODY_CHARS);
            warn!(
                "event=generate_request module=assistant status=error http_status={} body={}",
                status.as_u16(),
                message
            );
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: WireResponse = response.json().await?;
        parsed.into_text()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

impl From<&GenerateRequest> for WireRequest {
    fn from(request: &GenerateRequest) -> Self {
        let mut contents: Vec<WireContent> =
            request.history.iter().map(WireContent::from).collect();
        contents.push(WireContent {
            role: Some("user".to_string()),
            parts: request.parts.iter().map(WirePart::from).collect(),
        });

        Self {
            system_instruction: request.system_instruction.as_ref().map(|text| WireContent {
                role: None,
                parts: vec![WirePart::text(text)],
            }),
            contents,
            generation_config: request.response_schema.as_ref().map(|schema| {
                WireGenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: schema.clone(),
                }
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

impl From<&ChatMessage> for WireContent {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: Some(message.role.as_str().to_string()),
            parts: vec![WirePart::text(&message.text)],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<WireBlob>,
}

impl WirePart {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }
}

impl From<&Part> for WirePart {
    fn from(part: &Part) -> Self {
        match part {
            Part::Text(text) => Self::text(text),
            Part::Media(media) => Self {
                text: None,
                inline_data: Some(WireBlob {
                    mime_type: media.mime_type.clone(),
                    data: media.data.clone(),
                }),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    content: Option<WireContent>,
}

impl WireResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> AssistantResult<String> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeminiClient, WireRequest, WireResponse};
    use crate::assistant::client::{GenerateRequest, Part};
    use crate::assistant::extract::{task_schema, MediaPayload};
    use crate::assistant::AssistantError;
    use crate::config::AssistantConfig;
    use crate::model::chat::ChatMessage;
    use serde_json::json;

    #[test]
    fn from_config_requires_api_key() {
        let err = GeminiClient::from_config(&AssistantConfig::default()).unwrap_err();
        assert!(matches!(err, AssistantError::MissingApiKey));

        let blank = AssistantConfig::default().with_api_key("   ");
        let err = GeminiClient::from_config(&blank).unwrap_err();
        assert!(matches!(err, AssistantError::MissingApiKey));
    }

    #[test]
    fn endpoint_targets_configured_model() {
        let config = AssistantConfig::default().with_api_key("k");
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn chat_request_serializes_history_then_new_turn() {
        let request = GenerateRequest::chat(
            "be brief",
            vec![ChatMessage::user("hi"), ChatMessage::model("hello")],
            "plan my day",
        );
        let value = serde_json::to_value(WireRequest::from(&request)).unwrap();

        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "be brief");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][1]["role"], "model");
        assert_eq!(value["contents"][2]["parts"][0]["text"], "plan my day");
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn structured_request_carries_inline_data_and_schema() {
        let request = GenerateRequest::structured(
            vec![
                Part::Media(MediaPayload::new("image/png", "AAAA")),
                Part::Text("extract".to_string()),
            ],
            task_schema(),
        );
        let value = serde_json::to_value(WireRequest::from(&request)).unwrap();

        assert_eq!(value["contents"].as_array().unwrap().len(), 1);
        assert_eq!(
            value["contents"][0]["parts"][0]["inlineData"],
            json!({ "mimeType": "image/png", "data": "AAAA" })
        );
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["type"],
            "OBJECT"
        );
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let response: WireResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hello" }, { "text": " there" }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "Hello there");
    }

    #[test]
    fn response_without_text_is_empty_error() {
        let response: WireResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(
            response.into_text().unwrap_err(),
            AssistantError::EmptyResponse
        ));
    }
}
