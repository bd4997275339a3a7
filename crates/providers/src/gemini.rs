use crate::{GenerationResponse, ImagePart, MultimodalProvider, ProviderError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Candidate finish reasons that mean the answer was withheld.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "IMAGE_SAFETY",
];

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    cfg: Arc<GeminiConfig>,
}

impl GeminiProvider {
    pub fn new(cfg: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            cfg: Arc::new(cfg),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.model
        )
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Part<'a> {
    Text(&'a str),
    InlineData(Blob),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Blob {
    mime_type: String,
    data: String,
}

fn build_request<'a>(prompt: &'a str, images: &[ImagePart]) -> GenerateContentRequest<'a> {
    let mut parts = Vec::with_capacity(images.len() + 1);
    parts.push(Part::Text(prompt));
    parts.extend(images.iter().map(|img| {
        Part::InlineData(Blob {
            mime_type: img.mime_type.clone(),
            data: STANDARD.encode(&img.data),
        })
    }));
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts,
        }],
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_generation(self) -> GenerationResponse {
        let feedback_reason = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.get("blockReason"))
            .and_then(|r| r.as_str())
            .filter(|r| *r != "BLOCK_REASON_UNSPECIFIED")
            .map(str::to_string);

        let first = self.candidates.into_iter().next();
        let finish_reason = first
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .filter(|r| BLOCKING_FINISH_REASONS.contains(r))
            .map(|r| format!("finishReason {r}"));

        let text = first.and_then(|c| c.content).and_then(|content| {
            let texts: Vec<String> = content.parts.into_iter().filter_map(|p| p.text).collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.concat())
            }
        });

        GenerationResponse {
            text,
            block_reason: feedback_reason.or(finish_reason),
            feedback: self.prompt_feedback.map(|f| f.to_string()),
        }
    }
}

/// Pull the human readable message out of an API error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[async_trait::async_trait]
impl MultimodalProvider for GeminiProvider {
    async fn submit(
        &self,
        prompt: &str,
        images: &[ImagePart],
    ) -> Result<GenerationResponse, ProviderError> {
        let body = build_request(prompt, images);
        debug!(model = %self.cfg.model, images = images.len(), "sending generateContent request");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.cfg.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generateContent request rejected");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(parsed.into_generation())
    }

    fn model(&self) -> &str {
        &self.cfg.model
    }
}
