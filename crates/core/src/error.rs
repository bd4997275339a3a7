use providers::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the image scorer from producing a percentage.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingCredential,
    #[error("image file not found: {}", .0.display())]
    ImageNotFound(PathBuf),
    #[error("failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("content generation blocked: {0}")]
    Blocked(String),
    #[error("response contained no text")]
    MissingText,
    #[error("response was not a valid integer: '{0}'")]
    NotAnInteger(String),
    #[error("percentage out of range: {0}")]
    OutOfRange(i64),
}
