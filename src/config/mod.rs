mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::{debug, warn};

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

/// Reads the YAML file at `path`, falling back to built-in defaults when it
/// does not exist, then resolves the API key from the environment.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let mut config: Config = if tokio::fs::try_exists(path).await? {
        let config_str = tokio::fs::read_to_string(path).await?;
        serde_yaml::from_str(&config_str)?
    } else {
        warn!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        Config::default()
    };

    config.llm.api_key = env::var(&config.llm.api_key_env).unwrap_or_default();
    if config.llm.api_key.is_empty() {
        warn!(
            "{} is not set, requests will be sent without credentials",
            config.llm.api_key_env
        );
    }

    Ok(config)
}
