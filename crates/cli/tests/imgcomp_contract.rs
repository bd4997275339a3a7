use cli::imgcomp;
use image::RgbImage;
use lostfound_core::config::AppConfig;
use lostfound_core::error::ScoreError;
use providers::{GenerationResponse, ImagePart, MultimodalProvider, ProviderError, ProviderRegistry};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Scripted {
    reply: Result<GenerationResponse, u16>,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl MultimodalProvider for Scripted {
    async fn submit(
        &self,
        _prompt: &str,
        images: &[ImagePart],
    ) -> Result<GenerationResponse, ProviderError> {
        assert_eq!(images.len(), 2);
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(resp) => Ok(resp.clone()),
            Err(status) => Err(ProviderError::Status {
                status: *status,
                message: "rejected".into(),
            }),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

fn answer(text: &str) -> Arc<Scripted> {
    Arc::new(Scripted {
        reply: Ok(GenerationResponse {
            text: Some(text.to_string()),
            ..Default::default()
        }),
        calls: AtomicUsize::new(0),
    })
}

fn images(dir: &Path) -> (PathBuf, PathBuf) {
    let lost = dir.join("lost.png");
    let found = dir.join("found.png");
    RgbImage::new(5, 5).save(&lost).unwrap();
    RgbImage::new(7, 3).save(&found).unwrap();
    (lost, found)
}

async fn invoke(
    args: Vec<String>,
    cfg: anyhow::Result<AppConfig>,
    provider: Arc<Scripted>,
) -> (u8, String) {
    let mut out = Vec::new();
    let argv = std::iter::once("imgcomp".to_string()).chain(args);
    let code = imgcomp::run(
        argv,
        cfg,
        move |_: &AppConfig| -> Result<ProviderRegistry, ScoreError> {
            Ok(ProviderRegistry::new()
                .with_provider("scripted", provider)
                .set_preferred("scripted"))
        },
        &mut out,
    )
    .await;
    (code, String::from_utf8(out).unwrap())
}

fn argv(lost: &Path, found: &Path) -> Vec<String> {
    vec![
        lost.display().to_string(),
        "grey hoodie, size M".to_string(),
        found.display().to_string(),
        "-grey sweatshirt".to_string(),
    ]
}

#[tokio::test]
async fn prints_the_percentage_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let (lost, found) = images(dir.path());
    let provider = answer("88");
    let (code, out) = invoke(argv(&lost, &found), Ok(AppConfig::default()), provider.clone()).await;
    assert_eq!((code, out.as_str()), (0, "88\n"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_integer_answer_prints_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let (lost, found) = images(dir.path());
    let (code, out) = invoke(argv(&lost, &found), Ok(AppConfig::default()), answer("73%")).await;
    assert_eq!((code, out.as_str()), (1, "0\n"));
}

#[tokio::test]
async fn rejected_request_prints_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let (lost, found) = images(dir.path());
    let provider = Arc::new(Scripted {
        reply: Err(403),
        calls: AtomicUsize::new(0),
    });
    let (code, out) = invoke(argv(&lost, &found), Ok(AppConfig::default()), provider).await;
    assert_eq!((code, out.as_str()), (1, "0\n"));
}

#[tokio::test]
async fn missing_lost_image_never_calls_the_service() {
    let dir = tempfile::tempdir().unwrap();
    let (_, found) = images(dir.path());
    let provider = answer("50");
    let (code, out) = invoke(
        argv(&dir.path().join("missing.png"), &found),
        Ok(AppConfig::default()),
        provider.clone(),
    )
    .await;
    assert_eq!((code, out.as_str()), (1, "0\n"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn wrong_argument_count_prints_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let (lost, found) = images(dir.path());
    let mut args = argv(&lost, &found);
    args.pop();
    let provider = answer("50");
    let (code, out) = invoke(args, Ok(AppConfig::default()), provider.clone()).await;
    assert_eq!((code, out.as_str()), (1, "0\n"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    let mut args = argv(&lost, &found);
    args.push("extra".into());
    let (code, out) = invoke(args, Ok(AppConfig::default()), answer("50")).await;
    assert_eq!((code, out.as_str()), (1, "0\n"));
}

#[tokio::test]
async fn broken_configuration_prints_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let (lost, found) = images(dir.path());
    let (code, out) = invoke(
        argv(&lost, &found),
        Err(anyhow::anyhow!("bad config")),
        answer("50"),
    )
    .await;
    assert_eq!((code, out.as_str()), (1, "0\n"));
}
