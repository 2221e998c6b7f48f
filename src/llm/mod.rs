mod client;
mod types;

pub use client::{LlmClient, OpenRouterClient, extract_reply};
pub use types::*;
