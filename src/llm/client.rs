// src/llm/client.rs
// Adapter for the OpenAI-compatible chat completions endpoint

use std::fmt;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::classifier::ClassificationResult;
use crate::config::Config;
use crate::llm::prompt;

/// Everything that can go wrong on the model path. The arbitration layer
/// only ever logs these and falls back; they never reach a caller.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("request to model provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}

impl ModelError {
    /// Short failure class for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::Http(_) => "transport",
            ModelError::Api { .. } => "api",
            ModelError::InvalidResponse(_) => "invalid_response",
        }
    }
}

#[derive(Clone)]
pub struct ModelClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
}

// Keep the credential out of debug output and logs.
impl fmt::Debug for ModelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"***")
            .finish()
    }
}

impl ModelClient {
    /// Build a client from configuration. `None` when no API key is set;
    /// that is the supported rule-only mode, not an error.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.openai_api_key.clone()?;
        Some(Self {
            client: Client::new(),
            api_key,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One completion request for one email. Low temperature and a JSON
    /// response format keep the output parseable; the payload is still
    /// parsed and validated before it is trusted. No retries: a failed
    /// attempt is reported to the caller, which falls back to rules.
    pub async fn classify_email(
        &self,
        email_text: &str,
    ) -> Result<ClassificationResult, ModelError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": prompt::SYSTEM_PROMPT },
                { "role": "user", "content": prompt::build_user_prompt(email_text) },
            ],
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Value = resp.json().await?;
        let content = envelope["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ModelError::InvalidResponse("no content in completion choices".to_string())
            })?;

        debug!("model completion returned {} chars", content.len());

        let result: ClassificationResult = serde_json::from_str(content).map_err(|e| {
            ModelError::InvalidResponse(format!("content is not a classification payload: {e}"))
        })?;

        if result.auto_reply.trim().is_empty() {
            return Err(ModelError::InvalidResponse(
                "auto_reply is empty".to_string(),
            ));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_credential() {
        let config = Config {
            openai_api_key: None,
            ..Config::default()
        };
        assert!(ModelClient::from_config(&config).is_none());
    }

    #[test]
    fn test_from_config_trims_trailing_slash() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            openai_base_url: "http://localhost:9999/v1/".to_string(),
            ..Config::default()
        };
        let client = ModelClient::from_config(&config).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("http://localhost:9999/v1"));
        assert!(!debug.contains("v1/\""));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = Config {
            openai_api_key: Some("sk-very-secret".to_string()),
            ..Config::default()
        };
        let client = ModelClient::from_config(&config).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_error_kinds() {
        let api = ModelError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(api.kind(), "api");
        assert_eq!(
            ModelError::InvalidResponse("bad".to_string()).kind(),
            "invalid_response"
        );
    }
}
