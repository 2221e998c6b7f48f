use ameel::{
    assistant::Assistant,
    config::Config,
    llm::LlmClient,
    ocr::OcrEngine,
    server::{self, handlers::AppState},
    session::{Session, SessionStore},
};
use axum::Router;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::{io::Cursor, sync::Arc};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.llm.api_key = "test-api-key".to_string();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config
}

pub fn create_test_assistant(
    llm: Arc<dyn LlmClient>,
    ocr: Arc<dyn OcrEngine>,
) -> Assistant {
    Assistant::with_clients(&create_test_config(), llm, ocr)
}

pub fn create_test_session() -> Session {
    Session::new(generate_test_session_id())
}

pub fn create_test_app(llm: Arc<dyn LlmClient>, ocr: Arc<dyn OcrEngine>) -> Router {
    let config = create_test_config();
    let state = AppState {
        assistant: Arc::new(Assistant::with_clients(&config, llm, ocr)),
        sessions: Arc::new(SessionStore::new()),
    };
    server::router(state, config.server.max_upload_bytes)
}

/// Encode a blank RGB image of the given size as PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut out, ImageFormat::Png)
        .expect("Failed to encode test PNG");
    out.into_inner()
}

/// Generate unique session ID for tests
pub fn generate_test_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4000/v1/chat/completions"
  api_key_env: "AMEEL_SAMPLE_CONFIG_KEY"
  model: "anthropic/claude-3.5-sonnet"
  timeout_secs: 5

ocr:
  command: "/usr/local/bin/tesseract"

profiles:
  primary:
    name: "Sara"
    country: "Egypt"
    profession: "Auditor"
    traits: ["precise"]
"#;
