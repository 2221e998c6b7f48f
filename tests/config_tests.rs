use ameel::{chat::Shortcuts, config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

use common::test_utils::SAMPLE_CONFIG_YAML;

#[tokio::test]
async fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = config::load_from(dir.path().join("absent.yaml")).await.unwrap();

    assert_eq!(config.llm.base_url, "https://openrouter.ai/api/v1/chat/completions");
    assert_eq!(config.llm.model, "openai/gpt-4.1-mini");
    assert_eq!(config.llm.max_tokens, 500);
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(config.llm.api_key_env, "OPENROUTER_API_KEY");
    assert_eq!(config.ocr.bytes_language, "eng+ara");
    assert_eq!(config.ocr.default_language, "eng");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.profiles.primary.name, "Duaa");
    assert_eq!(config.profiles.creator.country, "India");
}

#[tokio::test]
async fn test_yaml_overrides_and_env_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, SAMPLE_CONFIG_YAML).await.unwrap();
    // The variable name is unique to this file
    unsafe { std::env::set_var("AMEEL_SAMPLE_CONFIG_KEY", "sk-from-env") };

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.llm.model, "anthropic/claude-3.5-sonnet");
    assert_eq!(config.llm.timeout_secs, 5);
    assert_eq!(config.llm.api_key, "sk-from-env");
    assert_eq!(config.llm.max_tokens, 500);
    assert_eq!(config.ocr.command, "/usr/local/bin/tesseract");
    assert_eq!(config.ocr.bytes_language, "eng+ara");
    assert_eq!(config.profiles.primary.name, "Sara");
    assert_eq!(config.profiles.creator.name, "Mohammad");
}

#[tokio::test]
async fn test_missing_env_key_leaves_empty_credentials() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, "llm:\n  api_key_env: \"AMEEL_UNSET_KEY_FOR_TESTS\"\n")
        .await
        .unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.llm.api_key, "");
}

#[tokio::test]
async fn test_invalid_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, "server:\n  port: \"not-a-number\"\n")
        .await
        .unwrap();

    assert!(config::load_from(&path).await.is_err());
}

#[tokio::test]
async fn test_profile_from_config_drives_shortcuts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, SAMPLE_CONFIG_YAML).await.unwrap();
    let config = config::load_from(&path).await.unwrap();

    let shortcuts = Shortcuts::new(&config.profiles);
    let (_, reply) = shortcuts.answer("Who is Sara?").unwrap();

    assert_eq!(reply, "Sara is an Auditor from Egypt. She is precise.");
}
