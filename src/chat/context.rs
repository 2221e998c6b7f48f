use crate::llm::{ChatMessage, Role};
use tracing::debug;

/// How many existing log entries accompany each new user message.
pub const CONTEXT_WINDOW: usize = 8;

/// Builds the exact message list sent for a chat turn: the last
/// `CONTEXT_WINDOW` log entries, the new user message, and exactly one
/// system message.
pub fn build_context(log: &[ChatMessage], user_input: &str, system_prompt: &str) -> Vec<ChatMessage> {
    let start = log.len().saturating_sub(CONTEXT_WINDOW);
    let mut messages = Vec::with_capacity(CONTEXT_WINDOW + 2);

    let mut seen_system = false;
    for message in &log[start..] {
        if message.role == Role::System {
            if seen_system {
                continue;
            }
            seen_system = true;
        }
        messages.push(message.clone());
    }
    messages.push(ChatMessage::user(user_input));

    if !seen_system {
        messages.insert(0, ChatMessage::system(system_prompt));
    }

    debug!(
        "Built context of {} messages from a log of {}",
        messages.len(),
        log.len()
    );

    messages
}

/// A `[system, user]` pair for one-shot requests outside the chat log.
pub fn single_turn(system_prompt: &str, user_content: impl Into<String>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(user_content),
    ]
}
