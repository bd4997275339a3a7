//! Provider abstractions for multimodal generation services.

use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod gemini;
pub mod noop;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("not implemented")]
    NotImplemented,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// Encoded image bytes handed to a provider alongside the prompt.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub mime_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    /// Concatenated text of the first candidate, if it produced any.
    pub text: Option<String>,
    /// Why the service withheld the prompt or its answer.
    pub block_reason: Option<String>,
    /// Raw prompt feedback, kept for diagnostics.
    pub feedback: Option<String>,
}

impl GenerationResponse {
    pub fn blocked(&self) -> bool {
        self.block_reason.is_some()
    }
}

#[async_trait::async_trait]
pub trait MultimodalProvider: Send + Sync {
    /// Submit one prompt together with its images as a single request.
    async fn submit(
        &self,
        prompt: &str,
        images: &[ImagePart],
    ) -> Result<GenerationResponse, ProviderError>;

    fn model(&self) -> &str;
}

#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn MultimodalProvider>>,
    pub preferred: Option<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, name: &str, provider: Arc<dyn MultimodalProvider>) -> Self {
        self.providers.insert(name.to_string(), provider);
        self
    }

    pub fn set_preferred(mut self, name: &str) -> Self {
        self.preferred = Some(name.to_string());
        self
    }

    pub fn provider(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<dyn MultimodalProvider>, ProviderError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.preferred.clone())
            .ok_or_else(|| {
                ProviderError::UnknownProvider("no multimodal provider configured".into())
            })?;
        self.providers
            .get(&key)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownProvider(key))
    }
}
