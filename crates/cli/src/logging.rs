//! Diagnostic log sink for the scorers.
//!
//! Lines go to an append-mode file as
//! `2024-05-01 10:00:00,123 - INFO - [imgcomp] - message`. When the file cannot be
//! opened the same events go to stderr instead; logging never stops the run.

use chrono::Local;
use lostfound_core::config::LoggingConfig;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    File,
    Stderr,
}

pub struct LineFormat {
    component: &'static str,
    style: LineStyle,
}

impl LineFormat {
    pub fn new(component: &'static str, style: LineStyle) -> Self {
        Self { component, style }
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG | Level::TRACE => "DEBUG",
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = level_name(*event.metadata().level());
        match self.style {
            LineStyle::File => write!(
                writer,
                "{} - {} - [{}] - ",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                level,
                self.component
            )?,
            LineStyle::Stderr => write!(writer, "{} - {}: ", level, self.component)?,
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Open the log file for appending, creating its directory first.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns where diagnostics end up.
pub fn init(cfg: &LoggingConfig, component: &'static str) -> LogSink {
    let level = cfg.level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let path = PathBuf::from(&cfg.path);

    match open_log_file(&path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .event_format(LineFormat::new(component, LineStyle::File))
                .try_init();
            tracing::info!("--- Logging Initialized ---");
            LogSink::File(path)
        }
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(io::stderr)
                .event_format(LineFormat::new(component, LineStyle::Stderr))
                .try_init();
            tracing::error!("Failed to configure logging to {}: {e}", path.display());
            LogSink::Stderr
        }
    }
}
