use crate::{GenerationResponse, ImagePart, MultimodalProvider, ProviderError};

#[derive(Debug, Default)]
pub struct NoopProvider;

#[async_trait::async_trait]
impl MultimodalProvider for NoopProvider {
    async fn submit(
        &self,
        _prompt: &str,
        _images: &[ImagePart],
    ) -> Result<GenerationResponse, ProviderError> {
        Err(ProviderError::NotImplemented)
    }

    fn model(&self) -> &str {
        "noop"
    }
}
