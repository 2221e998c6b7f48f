pub mod assistant;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod ocr;
pub mod server;
pub mod session;
pub mod tabular;

pub use error::{Error, Result};
