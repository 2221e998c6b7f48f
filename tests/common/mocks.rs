use ameel::{
    llm::{ChatMessage, Completion, CompletionError, LlmClient},
    ocr::{OcrEngine, OcrError},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub const MOCK_REPLY: &str = "mock reply";

/// Mock LLM client that records every message list it is sent
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub replies: Mutex<Vec<Completion>>,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlmClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_replies(replies: Vec<Completion>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: CompletionError) -> Arc<Self> {
        Self::with_replies(vec![Err(error)])
    }

    pub fn get_requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Completion {
        self.requests.lock().unwrap().push(messages.to_vec());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok(MOCK_REPLY.to_string());
        }
        replies.remove(0)
    }
}

/// Mock OCR engine returning a fixed result and recording language hints
#[derive(Debug)]
pub struct MockOcrEngine {
    pub reply: Result<String, OcrError>,
    pub languages: Mutex<Vec<String>>,
}

impl MockOcrEngine {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            languages: Mutex::new(Vec::new()),
        })
    }

    pub fn crashing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(OcrError::Engine(message.to_string())),
            languages: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.languages.lock().unwrap().len()
    }

    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().unwrap().clone()
    }
}

#[async_trait]
impl OcrEngine for MockOcrEngine {
    async fn recognize(&self, _png: &[u8], language: &str) -> Result<String, OcrError> {
        self.languages.lock().unwrap().push(language.to_string());
        self.reply.clone()
    }
}
