use cli::{imgcomp, install_panic_sentinel, logging};
use lostfound_core::config::{self, LoggingConfig};
use lostfound_core::image_similarity::build_registry;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    install_panic_sentinel(imgcomp::FAILURE);

    let cfg = config::load_from_env();
    let log_cfg = cfg
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());
    logging::init(&log_cfg, "imgcomp");

    let mut stdout = std::io::stdout();
    let code = imgcomp::run(std::env::args_os(), cfg, build_registry, &mut stdout).await;
    ExitCode::from(code)
}
