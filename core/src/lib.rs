pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod invocation;
pub mod keys;
#[cfg(feature = "host")]
pub mod launch;
#[cfg(feature = "host")]
pub mod logging;
pub mod path;
pub mod renderer;
pub mod shell;
pub mod surface;
pub mod template;

pub use error::{ConfigError, LoadError, ReadFailure, Result};
pub use shell::{DisplayState, Shell};
