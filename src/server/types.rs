use crate::ocr::RecognitionBody;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub session_id: String,
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub recognition: RecognitionBody,
}

#[derive(Debug, Deserialize)]
pub struct TableUploadQuery {
    #[serde(default)]
    pub session_id: Option<String>,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub session_id: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

#[derive(Debug, Deserialize)]
pub struct TableQuestion {
    pub session_id: String,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct SessionClosed {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub chat_messages: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
