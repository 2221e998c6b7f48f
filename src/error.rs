use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Could not open image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not read file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not read file: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Errors caused by what the caller sent rather than by the server.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Input(_) | Self::Image(_) | Self::Csv(_) | Self::Spreadsheet(_)
        )
    }
}
