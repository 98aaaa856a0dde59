//! Resource directory lookup.

use std::path::PathBuf;

/// Directory holding bundled resources such as the Markdown renderer.
#[cfg(feature = "dist")]
pub fn resource_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
        .unwrap_or_else(|| PathBuf::from("resources"))
}

#[cfg(not(feature = "dist"))]
pub fn resource_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}
