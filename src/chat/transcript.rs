use crate::llm::{ChatMessage, Role};

/// Plain-text transcript: one `ROLE: content` line per non-system message.
pub fn render(log: &[ChatMessage]) -> String {
    log.iter()
        .filter(|m| m.role != Role::System)
        .map(|m| format!("{}: {}", m.role.as_str().to_uppercase(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}
