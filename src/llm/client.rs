use super::types::*;
use crate::{Result, config::LlmConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_RAW_BODY_CHARS: usize = 200;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `messages` to the remote model. Every failure comes back as a
    /// `CompletionError`; this never panics or propagates transport errors.
    async fn complete(&self, messages: &[ChatMessage]) -> Completion;
}

pub struct OpenRouterClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl OpenRouterClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One POST to the completion endpoint with explicit request settings.
    pub async fn send(
        &self,
        messages: &[ChatMessage],
        model: &str,
        max_tokens: u32,
        temperature: f32,
        timeout: Duration,
    ) -> Completion {
        let body = ChatCompletionRequest {
            model,
            messages,
            max_tokens,
            temperature,
        };

        debug!(
            "Sending chat completion with {} messages to {}",
            messages.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let raw = response
            .text()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let data: Value = serde_json::from_str(&raw).map_err(|_| {
            warn!("Completion endpoint returned a non-JSON body (status {status})");
            CompletionError::InvalidResponse {
                status,
                body: raw.chars().take(MAX_RAW_BODY_CHARS).collect(),
            }
        })?;

        if status >= 400 {
            warn!("Completion endpoint returned status {status}");
            return Err(CompletionError::Api {
                status,
                payload: payload_text(&data),
            });
        }

        extract_reply(&data)
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Completion {
        self.send(
            messages,
            &self.model,
            self.max_tokens,
            self.temperature,
            self.timeout,
        )
        .await
    }
}

fn payload_text(data: &Value) -> String {
    match data {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pulls `choices[0].message.content` out of a success body, degrading to
/// the first choice and then the whole body when fields are missing.
pub fn extract_reply(data: &Value) -> Completion {
    match data {
        Value::Object(map) => match map.get("choices").and_then(Value::as_array) {
            Some(choices) if !choices.is_empty() => {
                let first = &choices[0];
                let content = first
                    .get("message")
                    .and_then(|m| m.get("content"))
                    .and_then(Value::as_str)
                    .filter(|c| !c.is_empty());

                Ok(content.map_or_else(|| first.to_string(), str::to_string))
            }
            _ => Ok(data.to_string()),
        },
        Value::Array(_) => Ok(data.to_string()),
        other => Err(CompletionError::UnexpectedStructure(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}
