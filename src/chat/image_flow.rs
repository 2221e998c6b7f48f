use crate::ocr::NO_TEXT_FOUND;

pub const IMAGE_CHAT_GREETING: &str = "👋 Upload an image or type your query, and I’ll help you analyze it. (OCR, Translate, Summarize)";
pub const IMAGE_RECEIVED: &str = "✅ Got your image! You can now ask me to:\n- 📝 Extract text\n- 🌍 Translate text\n- 📖 Summarize content";
pub const UPLOAD_FIRST: &str = "⚠️ Please upload an image first.";
pub const SUMMARY_NOTE: &str = "Summarize this image content";

/// What the user wants done with the session's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageIntent {
    Extract,
    Translate,
    Summarize,
    General,
}

impl ImageIntent {
    /// Case-insensitive keyword match, checked in declaration order.
    pub fn classify(input: &str) -> Self {
        let lowered = input.to_lowercase();
        if lowered.contains("extract") {
            Self::Extract
        } else if lowered.contains("translate") {
            Self::Translate
        } else if lowered.contains("summarize") {
            Self::Summarize
        } else {
            Self::General
        }
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.is_empty() { NO_TEXT_FOUND } else { text }
}

pub fn extracted_reply(ocr_text: &str) -> String {
    format!("🔍 Extracted text:\n\n{}", or_placeholder(ocr_text))
}

pub fn translate_prompt(ocr_text: &str) -> String {
    format!("Translate this text into English:\n{ocr_text}")
}

pub fn summarize_prompt(ocr_text: &str, dimensions: &str, note: &str) -> String {
    format!(
        "OCR text:\n{}\nMetadata: {}\nExtra note: {}",
        or_placeholder(ocr_text),
        dimensions,
        note
    )
}

pub fn general_prompt(ocr_text: &str, user_input: &str) -> String {
    format!(
        "You are an AI assistant helping the user analyze images.
The extracted text from the image is:

{}

The user asked: \"{}\"

Please give a helpful, human-like answer based on the image content and text.
If relevant, also suggest whether extracting text, translating, or summarizing would help.",
        or_placeholder(ocr_text),
        user_input
    )
}
