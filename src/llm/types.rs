use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Body of a chat-completion call. Built fresh for every request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Why a completion produced no usable reply. The `Display` output is the
/// text shown to the user in place of the reply.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompletionError {
    #[error("⚠️ Network error calling OpenRouter: {0}")]
    Network(String),

    #[error("⚠️ Invalid response (status {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    #[error("⚠️ API error (status {status}): {payload}")]
    Api { status: u16, payload: String },

    #[error("⚠️ Unexpected response structure: {0}")]
    UnexpectedStructure(String),
}

pub type Completion = std::result::Result<String, CompletionError>;

/// Flattens a completion into the text of an assistant turn.
pub fn completion_text(completion: Completion) -> String {
    completion.unwrap_or_else(|e| e.to_string())
}
