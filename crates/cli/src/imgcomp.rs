use crate::emit;
use clap::Parser;
use lostfound_core::config::AppConfig;
use lostfound_core::error::ScoreError;
use lostfound_core::image_similarity;
use lostfound_core::models::ComparisonRequest;
use providers::ProviderRegistry;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

pub const FAILURE: &str = "0";

#[derive(Debug, Parser)]
#[command(name = "imgcomp")]
#[command(about = "Compare a lost and a found item (image + description)", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ImageArgs {
    /// Path to the lost item image
    #[arg(allow_hyphen_values = true)]
    pub lost_image_path: PathBuf,
    /// Description of the lost item
    #[arg(allow_hyphen_values = true)]
    pub lost_description: String,
    /// Path to the found item image
    #[arg(allow_hyphen_values = true)]
    pub found_image_path: PathBuf,
    /// Description of the found item
    #[arg(allow_hyphen_values = true)]
    pub found_description: String,
}

impl From<ImageArgs> for ComparisonRequest {
    fn from(args: ImageArgs) -> Self {
        Self {
            lost_image_path: args.lost_image_path,
            lost_description: args.lost_description,
            found_image_path: args.found_image_path,
            found_description: args.found_description,
        }
    }
}

/// Parse `argv` (program name first), score, print. Returns the exit status.
///
/// `registry` is only consulted once both image paths have been verified.
pub async fn run<I, T, W, F>(
    argv: I,
    cfg: anyhow::Result<AppConfig>,
    registry: F,
    out: &mut W,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    F: FnOnce(&AppConfig) -> Result<ProviderRegistry, ScoreError>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    info!("imgcomp started with {} args", argv.len().saturating_sub(1));

    let args = match ImageArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            error!("Failed to parse command line arguments: {}", e.kind());
            emit(out, FAILURE);
            return 1;
        }
    };
    info!("Command line arguments parsed successfully.");

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {e:#}");
            emit(out, FAILURE);
            return 1;
        }
    };

    let request = ComparisonRequest::from(args);
    match image_similarity::compare_with(&request, &cfg, registry).await {
        Ok(percentage) => {
            emit(out, &percentage.to_string());
            0
        }
        Err(e) => {
            error!("Comparison failed: {e}");
            emit(out, FAILURE);
            1
        }
    }
}
