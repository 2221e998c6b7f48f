mod engine;

pub use engine::{OcrEngine, OcrError, TesseractEngine};

use crate::config::OcrConfig;
use image::{DynamicImage, GenericImageView, ImageFormat};
use serde::Serialize;
use std::{io::Cursor, sync::Arc};
use tracing::{debug, warn};

pub const NO_TEXT_FOUND: &str = "[no text found]";

/// Outcome of a single recognition call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub text: String,
    pub error: Option<OcrError>,
}

impl RecognitionResult {
    fn recognized(text: String) -> Self {
        Self { text, error: None }
    }

    fn failed(error: OcrError) -> Self {
        Self {
            text: String::new(),
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The recognized text, or the diagnostic when recognition failed.
    fn display_text(&self) -> String {
        match &self.error {
            Some(e) => e.to_string(),
            None => self.text.clone(),
        }
    }

    /// Like `display_text`, with a placeholder for images without text.
    pub fn text_or_placeholder(&self) -> String {
        let text = self.display_text();
        if text.is_empty() {
            NO_TEXT_FOUND.to_string()
        } else {
            text
        }
    }
}

/// Wire form of a recognition result. `display` is what a user should see:
/// the text, the placeholder or the diagnostic.
#[derive(Debug, Serialize)]
pub struct RecognitionBody {
    pub text: String,
    pub display: String,
    pub error: Option<String>,
}

impl From<&RecognitionResult> for RecognitionBody {
    fn from(result: &RecognitionResult) -> Self {
        Self {
            text: result.text.clone(),
            display: result.text_or_placeholder(),
            error: result.error.as_ref().map(ToString::to_string),
        }
    }
}

#[derive(Clone)]
pub struct OcrAdapter {
    engine: Arc<dyn OcrEngine>,
    bytes_language: String,
    default_language: String,
}

impl OcrAdapter {
    pub fn new(engine: Arc<dyn OcrEngine>, config: &OcrConfig) -> Self {
        Self {
            engine,
            bytes_language: config.bytes_language.clone(),
            default_language: config.default_language.clone(),
        }
    }

    /// Decodes raw uploaded bytes and recognizes them with the bilingual hint.
    pub async fn recognize_bytes(&self, bytes: &[u8]) -> RecognitionResult {
        match image::load_from_memory(bytes) {
            Ok(image) => self.run(&image, &self.bytes_language).await,
            Err(e) => {
                warn!("OCR input could not be decoded: {}", e);
                RecognitionResult::failed(OcrError::Decode(e.to_string()))
            }
        }
    }

    /// Recognizes an already decoded image with the default hint.
    pub async fn recognize_image(&self, image: &DynamicImage) -> RecognitionResult {
        self.run(image, &self.default_language).await
    }

    async fn run(&self, image: &DynamicImage, language: &str) -> RecognitionResult {
        let mut png = Cursor::new(Vec::new());
        if let Err(e) = image.write_to(&mut png, ImageFormat::Png) {
            return RecognitionResult::failed(OcrError::Decode(e.to_string()));
        }

        match self.engine.recognize(png.get_ref(), language).await {
            Ok(text) => {
                let text = text.trim().to_string();
                debug!("OCR recognized {} characters", text.chars().count());
                RecognitionResult::recognized(text)
            }
            Err(e) => {
                warn!("OCR engine failed: {}", e);
                RecognitionResult::failed(e)
            }
        }
    }
}

/// `image_width: W, image_height: H`, as included in summary prompts.
pub fn dimensions_note(image: &DynamicImage) -> String {
    let (width, height) = image.dimensions();
    format!("image_width: {width}, image_height: {height}")
}
