use std::time::Duration;

use anyhow::Context;
use axum::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::InferenceConfig;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("inference provider returned {status}: {body}")]
    Provider { status: u16, body: String },
}

/// Raw output of a text-generation call. Providers are not consistent about
/// the response shape: some return a bare string, some a record with a
/// `generated_text` field, some a list of either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Text(String),
    Record(serde_json::Map<String, Value>),
    Sequence(Vec<GenerationResult>),
    Other(Value),
}

impl GenerationResult {
    /// Flatten any provider shape into a single string. Total: every shape
    /// normalizes to something, nothing here can fail.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Record(fields) => record_text(&fields),
            Self::Sequence(items) => join_items(items),
            Self::Other(value) => value.to_string(),
        }
    }

    // Inside a sequence only text and records carry content; anything else
    // contributes nothing.
    fn item_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Record(fields) => record_text(&fields),
            Self::Sequence(items) => join_items(items),
            Self::Other(_) => String::new(),
        }
    }
}

fn record_text(fields: &serde_json::Map<String, Value>) -> String {
    fields
        .get("generated_text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn join_items(items: Vec<GenerationResult>) -> String {
    items
        .into_iter()
        .map(GenerationResult::item_text)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, InferenceError>;
}

/// Hugging Face style inference endpoint: POST {"inputs": prompt} to
/// `<api_url>/<model>`, optionally bearer-authenticated.
pub struct HfInference {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HfInference {
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("build inference http client")?;
        Ok(Self {
            client,
            endpoint: format!("{}/{}", config.api_url.trim_end_matches('/'), config.model),
            api_token: config.api_token.clone(),
        })
    }
}

#[async_trait]
impl InferenceClient for HfInference {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, InferenceError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "inputs": prompt }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let result = response.json::<GenerationResult>().await?;
        debug!(prompt_len = prompt.len(), "inference call ok");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: Value) -> String {
        serde_json::from_value::<GenerationResult>(value)
            .expect("every json shape decodes")
            .into_text()
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        assert_eq!(normalize(json!("hello there")), "hello there");
    }

    #[test]
    fn record_extracts_generated_text() {
        assert_eq!(normalize(json!({"generated_text": "X"})), "X");
    }

    #[test]
    fn record_without_generated_text_is_empty() {
        assert_eq!(normalize(json!({})), "");
        assert_eq!(normalize(json!({"other_field": "Y"})), "");
    }

    #[test]
    fn non_string_generated_text_is_empty() {
        assert_eq!(normalize(json!({"generated_text": 7})), "");
    }

    #[test]
    fn sequence_joins_non_empty_pieces_in_order() {
        assert_eq!(
            normalize(json!(["a", {"generated_text": "b"}, 42])),
            "a b"
        );
    }

    #[test]
    fn sequence_skips_empty_records() {
        assert_eq!(normalize(json!([{}, "only"])), "only");
    }

    #[test]
    fn nested_sequences_are_flattened() {
        assert_eq!(normalize(json!([["a", "b"], {"generated_text": "c"}])), "a b c");
    }

    #[test]
    fn unrecognized_scalar_falls_back_to_json_text() {
        assert_eq!(normalize(json!(42)), "42");
        assert_eq!(normalize(json!(true)), "true");
    }

    #[test]
    fn provider_error_carries_status_and_body() {
        let err = InferenceError::Provider {
            status: 503,
            body: "model loading".into(),
        };
        assert_eq!(
            err.to_string(),
            "inference provider returned 503: model loading"
        );
    }
}
