//! Tracing setup: a daily rolling log file under the data directory.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "MDUG_LOG";

/// Keeps the background writer alive; logs are flushed when dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Installs the global subscriber. Returns `None` when no log directory can be
/// created or a subscriber is already installed; the viewer runs without logs
/// in that case.
pub fn init(data_dir: &Path, default_filter: &str) -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir(data_dir)
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("mdug").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "mdug.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    let guard = LoggingGuard {
        _guard: guard,
        log_dir,
    };
    tracing::info!(log_dir = %guard.log_dir().display(), version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    Some(guard)
}

fn ensure_log_dir(data_dir: &Path) -> std::io::Result<PathBuf> {
    let dir = data_dir.join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
