//! File logging through `tracing`.
//!
//! The TUI owns the terminal, so log lines go to a daily-rotated file in the
//! cache directory. `DROPZONE_LOG` sets the filter (default `dropzone=info`)
//! and `DROPZONE_LOG_DIR` moves the files.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::app::settings::default_log_dir;

pub const FILTER_ENV: &str = "DROPZONE_LOG";
pub const DIR_ENV: &str = "DROPZONE_LOG_DIR";
const DEFAULT_FILTER: &str = "dropzone=info";

/// Keeps the background writer alive; logs are flushed when it drops.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn log_dir() -> Option<PathBuf> {
    let preferred = std::env::var_os(DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&preferred)
        .map(|_| preferred)
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("dropzone").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// Install the global subscriber. Returns `None` when no log directory is
/// writable or a subscriber is already set; the program runs on without
/// logging in that case.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "dropzone.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        default_hook(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
