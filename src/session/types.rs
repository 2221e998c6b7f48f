use crate::{chat::image_flow::IMAGE_CHAT_GREETING, llm::ChatMessage, tabular::Table};
use chrono::{DateTime, Utc};
use image::DynamicImage;

/// State owned by one interactive session. Lives only in memory.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Chat turns, user and assistant only.
    pub chat: Vec<ChatMessage>,
    pub image_chat: Vec<ChatMessage>,
    pub image: Option<DynamicImage>,
    pub last_ocr: Option<String>,
    pub table: Option<Table>,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            chat: Vec::new(),
            image_chat: vec![ChatMessage::assistant(IMAGE_CHAT_GREETING)],
            image: None,
            last_ocr: None,
            table: None,
        }
    }
}
