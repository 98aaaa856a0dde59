use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Why a document could not be shown.
///
/// The `Display` text is what the error page shows, so it names the resolved
/// path and nothing else.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },
}

impl LoadError {
    /// The resolved path the load was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path } | LoadError::Read { path, .. } => path,
        }
    }

    /// Short, stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => "not_found",
            LoadError::Read { .. } => "read",
        }
    }
}

#[derive(Error, Debug)]
pub enum ReadFailure {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
