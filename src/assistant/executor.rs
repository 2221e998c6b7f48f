use crate::{
    Error, Result,
    chat::{
        ImageIntent, Shortcuts, build_context,
        image_flow::{
            IMAGE_RECEIVED, SUMMARY_NOTE, UPLOAD_FIRST, extracted_reply, general_prompt,
            summarize_prompt, translate_prompt,
        },
        single_turn, system_prompt,
    },
    config::Config,
    llm::{ChatMessage, LlmClient, OpenRouterClient, completion_text},
    ocr::{OcrAdapter, OcrEngine, RecognitionResult, TesseractEngine, dimensions_note},
    session::Session,
    tabular::{Table, question_prompt},
};
use image::DynamicImage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one user turn at a time against a caller-owned `Session`.
pub struct Assistant {
    llm_client: Arc<dyn LlmClient>,
    ocr: OcrAdapter,
    shortcuts: Shortcuts,
    system_prompt: String,
}

impl Assistant {
    pub fn new(config: &Config) -> Result<Self> {
        let llm_client = Arc::new(OpenRouterClient::new(&config.llm)?);
        let ocr_engine = Arc::new(TesseractEngine::new(config.ocr.command.clone()));
        Ok(Self::with_clients(config, llm_client, ocr_engine))
    }

    pub fn with_clients(
        config: &Config,
        llm_client: Arc<dyn LlmClient>,
        ocr_engine: Arc<dyn OcrEngine>,
    ) -> Self {
        info!(
            "Initializing assistant with model {} and OCR command {}",
            config.llm.model, config.ocr.command
        );

        Self {
            llm_client,
            ocr: OcrAdapter::new(ocr_engine, &config.ocr),
            shortcuts: Shortcuts::new(&config.profiles),
            system_prompt: system_prompt(&config.profiles),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// A chat turn: shortcut or remote reply, both recorded in the chat log.
    pub async fn chat(&self, session: &mut Session, input: &str) -> String {
        info!("Processing chat turn for session: {}", session.id);

        let reply = match self.shortcuts.answer(input) {
            Some((rule, reply)) => {
                debug!("Shortcut '{}' answered locally", rule);
                reply.to_string()
            }
            None => {
                let messages = build_context(&session.chat, input, &self.system_prompt);
                self.complete(&messages).await
            }
        };

        session.chat.push(ChatMessage::user(input));
        session.chat.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    /// Stores an uploaded image for the image flow. Undecodable bytes are an
    /// input error and leave the session untouched.
    pub fn upload_image(&self, session: &mut Session, bytes: &[u8]) -> Result<String> {
        let image = image::load_from_memory(bytes)?;
        debug!(
            "Session {} uploaded a {}x{} image",
            session.id,
            image.width(),
            image.height()
        );

        session.image = Some(DynamicImage::ImageRgb8(image.to_rgb8()));
        session
            .image_chat
            .push(ChatMessage::assistant(IMAGE_RECEIVED));
        Ok(IMAGE_RECEIVED.to_string())
    }

    /// An image-chat turn routed by keyword. Without an uploaded image the
    /// notice is returned and nothing is recorded.
    pub async fn image_chat(&self, session: &mut Session, input: &str) -> String {
        let Some(image) = session.image.as_ref() else {
            debug!("Session {} has no image yet", session.id);
            return UPLOAD_FIRST.to_string();
        };

        let intent = ImageIntent::classify(input);
        info!(
            "Processing image turn for session {} as {:?}",
            session.id, intent
        );

        let recognition = self.ocr.recognize_image(image).await;
        let reply = match (&recognition.error, intent) {
            (Some(error), ImageIntent::Extract) => extracted_reply(&error.to_string()),
            (Some(error), _) => error.to_string(),
            (None, _) => self.image_reply(intent, image, &recognition.text, input).await,
        };

        if !recognition.is_error() {
            session.last_ocr = Some(recognition.text);
        }
        session.image_chat.push(ChatMessage::user(input));
        session.image_chat.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    async fn image_reply(
        &self,
        intent: ImageIntent,
        image: &DynamicImage,
        ocr_text: &str,
        input: &str,
    ) -> String {
        let prompt = match intent {
            ImageIntent::Extract => return extracted_reply(ocr_text),
            ImageIntent::Translate => translate_prompt(ocr_text),
            ImageIntent::Summarize => {
                summarize_prompt(ocr_text, &dimensions_note(image), SUMMARY_NOTE)
            }
            ImageIntent::General => general_prompt(ocr_text, input),
        };

        self.complete(&single_turn(&self.system_prompt, prompt)).await
    }

    /// Standalone OCR of an uploaded image with the default hint. The text is
    /// kept for download.
    pub async fn ocr_only(&self, session: &mut Session, bytes: &[u8]) -> Result<RecognitionResult> {
        let image = image::load_from_memory(bytes)?;
        let recognition = self.ocr.recognize_image(&image).await;

        if !recognition.is_error() {
            session.last_ocr = Some(recognition.text.clone());
        }
        Ok(recognition)
    }

    pub fn upload_table<'s>(
        &self,
        session: &'s mut Session,
        filename: &str,
        bytes: &[u8],
    ) -> Result<&'s Table> {
        let table = Table::from_bytes(filename, bytes)?;
        info!(
            "Session {} loaded table {} ({} rows)",
            session.id,
            filename,
            table.rows.len()
        );
        Ok(session.table.insert(table))
    }

    /// Answers a question about the session's table. Not added to the chat log.
    pub async fn ask_table(&self, session: &Session, question: &str) -> Result<String> {
        let table = session
            .table
            .as_ref()
            .ok_or_else(|| Error::input("Upload a CSV or XLSX file first"))?;

        let prompt = question_prompt(table, question);
        Ok(self
            .complete(&single_turn(&self.system_prompt, prompt))
            .await)
    }

    async fn complete(&self, messages: &[ChatMessage]) -> String {
        let completion = self.llm_client.complete(messages).await;
        if let Err(e) = &completion {
            warn!("Completion failed, replying with diagnostic: {:?}", e);
        }
        completion_text(completion)
    }
}
