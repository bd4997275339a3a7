//! Image-and-description similarity via a multimodal provider.

use crate::config::{self, AppConfig};
use crate::error::ScoreError;
use crate::images;
use crate::models::{truncate_for_log, ComparisonRequest};
use crate::prompt::similarity_prompt;
use providers::gemini::{GeminiConfig, GeminiProvider};
use providers::{MultimodalProvider, ProviderRegistry};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

pub const GEMINI: &str = "gemini";

/// Register the Gemini provider using the credential from the environment.
pub fn build_registry(cfg: &AppConfig) -> Result<ProviderRegistry, ScoreError> {
    build_registry_with_key(cfg, config::api_key_from_env())
}

pub fn build_registry_with_key(
    cfg: &AppConfig,
    api_key: Option<String>,
) -> Result<ProviderRegistry, ScoreError> {
    let Some(api_key) = api_key else {
        error!("API key is not configured (GEMINI_API_KEY).");
        return Err(ScoreError::MissingCredential);
    };
    info!("Configuring Gemini client...");
    let provider = GeminiProvider::new(GeminiConfig {
        api_key,
        base_url: cfg.gemini.base_url.clone(),
        model: cfg.gemini.model.clone(),
        timeout: cfg.gemini.timeout_secs.map(Duration::from_secs),
    })
    .map_err(|e| {
        error!("Failed to configure Gemini client: {e}");
        ScoreError::from(e)
    })?;
    info!("Gemini client configured successfully.");
    Ok(ProviderRegistry::new()
        .with_provider(GEMINI, Arc::new(provider))
        .set_preferred(GEMINI))
}

/// Check both image paths exist, logging each one that does not.
pub fn verify_paths(request: &ComparisonRequest) -> Result<(), ScoreError> {
    let mut missing = None;
    for (label, path) in [
        ("Lost", &request.lost_image_path),
        ("Found", &request.found_image_path),
    ] {
        if !path.exists() {
            error!(
                "Input Error: {label} image file not found at path: {}",
                path.display()
            );
            missing.get_or_insert_with(|| path.clone());
        }
    }
    match missing {
        Some(path) => Err(ScoreError::ImageNotFound(path)),
        None => {
            info!("Input image file paths verified.");
            Ok(())
        }
    }
}

/// Validate inputs, pick the provider, then score.
pub async fn compare_with<F>(
    request: &ComparisonRequest,
    cfg: &AppConfig,
    registry: F,
) -> Result<u8, ScoreError>
where
    F: FnOnce(&AppConfig) -> Result<ProviderRegistry, ScoreError>,
{
    verify_paths(request)?;
    let provider = registry(cfg)?.provider(None)?;
    score(request, provider.as_ref()).await
}

pub async fn score(
    request: &ComparisonRequest,
    provider: &dyn MultimodalProvider,
) -> Result<u8, ScoreError> {
    info!("--- similarity scoring started ---");
    info!(
        "Received Args: lost_img='{}', found_img='{}'",
        request.lost_image_path.display(),
        request.found_image_path.display()
    );
    info!(
        "Received Args: lost_desc='{}', found_desc='{}'",
        truncate_for_log(&request.lost_description, 100),
        truncate_for_log(&request.found_description, 100)
    );

    let mut loaded = Vec::with_capacity(2);
    for (label, path) in [
        ("lost", &request.lost_image_path),
        ("found", &request.found_image_path),
    ] {
        info!("Attempting to load {label} image from: {}", path.display());
        let img = images::load(path).map_err(|e| {
            error!("Error loading {label} image: {e}");
            e
        })?;
        info!(
            "{label} image loaded successfully. Format: {}, Size: ({}, {})",
            img.format, img.width, img.height
        );
        loaded.push(img.to_part());
    }

    let prompt = similarity_prompt(&request.lost_description, &request.found_description);
    info!("Prompt prepared for API call.");

    info!("Calling model {} with prompt and 2 images...", provider.model());
    let response = provider.submit(&prompt, &loaded).await.map_err(|e| {
        error!("An error occurred during the API call: {e}");
        e
    })?;
    info!("Received response from API.");

    match &response.text {
        Some(text) => info!("Raw response text: '{text}'"),
        None => warn!("Response carried no text."),
    }
    if let Some(feedback) = &response.feedback {
        warn!("Prompt feedback received: {feedback}");
    }
    if let Some(reason) = &response.block_reason {
        error!("Content generation blocked: {reason}");
        return Err(ScoreError::Blocked(reason.clone()));
    }

    let Some(text) = response.text else {
        error!("Could not extract text from the response.");
        return Err(ScoreError::MissingText);
    };
    let percentage = parse_percentage(&text).map_err(|e| {
        error!("{e}");
        e
    })?;
    info!("Successfully parsed percentage: {percentage}");
    info!("--- similarity scoring finished successfully ---");
    Ok(percentage)
}

/// Parse a bare base-10 integer in [0, 100]. No clamping.
pub fn parse_percentage(text: &str) -> Result<u8, ScoreError> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ScoreError::NotAnInteger(trimmed.to_string()))?;
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or(ScoreError::OutOfRange(value))
}
