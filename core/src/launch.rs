//! Process startup shared by the native hosts: arguments, config, logging.

use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::invocation::Invocation;
use crate::logging::{self, LoggingGuard};

/// Everything the window needs, resolved before it is created.
pub struct Launch {
    pub config: ViewerConfig,
    pub file: Option<String>,
    pub resource_dir: PathBuf,
    pub data_dir: PathBuf,
}

/// Parses arguments, loads config and starts logging. Returns `None` when the
/// invocation only asked for help or version output.
pub fn startup(resource_dir: PathBuf) -> Option<(Launch, Option<LoggingGuard>)> {
    let file = match Invocation::from_env() {
        Invocation::Print { text } => {
            print!("{text}");
            return None;
        }
        Invocation::View { file } => file,
    };

    let data_dir = data_dir();
    let config_path = ViewerConfig::path(&data_dir);
    let (loaded, load_error) = match ViewerConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (ViewerConfig::default(), Some(err)),
    };
    let problems = loaded.validate();
    let config = loaded.with_defaults_for_invalid();

    let logging = logging::init(&data_dir, &config.log.filter);

    if let Some(err) = load_error {
        tracing::warn!(path = %config_path.display(), error = %err, "config unreadable, using defaults");
    }
    for problem in &problems {
        tracing::warn!(path = %config_path.display(), problem = %problem, "invalid config value replaced by default");
    }

    let launch = Launch {
        config,
        file,
        resource_dir,
        data_dir,
    };
    Some((launch, logging))
}

/// Directory holding `config.toml`, logs and the page cache.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("MDUG_DATA_DIR").filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    platform_data_dir().unwrap_or_else(|| std::env::temp_dir().join("mdug"))
}

#[cfg(windows)]
fn platform_data_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(|dir| PathBuf::from(dir).join("mdug"))
}

#[cfg(not(windows))]
fn platform_data_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|dir| PathBuf::from(dir).join(".config").join("mdug"))
}
