use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OcrError {
    #[error("❌ OCR error: could not decode image: {0}")]
    Decode(String),

    #[error("❌ OCR error: could not start recognition engine: {0}")]
    Spawn(String),

    #[error("❌ OCR error: {0}")]
    Engine(String),
}

/// A text recognizer taking PNG bytes and a language hint such as `eng+ara`.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError>;
}

/// Runs the `tesseract` command line tool, piping the image through stdin.
pub struct TesseractEngine {
    command: String,
}

impl TesseractEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError> {
        debug!(
            "Running {} on {} bytes with language hint {}",
            self.command,
            png.len(),
            language
        );

        let mut child = Command::new(&self.command)
            .args(["stdin", "stdout", "-l", language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| OcrError::Spawn(e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OcrError::Spawn("stdin unavailable".to_string()))?;
        let input = png.to_vec();
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(&input).await;
            drop(stdin);
            result
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| OcrError::Engine(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(OcrError::Engine(format!("writing image failed: {e}"))),
            Err(e) => return Err(OcrError::Engine(e.to_string())),
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
