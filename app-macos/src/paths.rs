//! Resource directory lookup.

use std::path::PathBuf;

/// Directory holding bundled resources such as the Markdown renderer.
///
/// In an app bundle the executable sits in `Contents/MacOS` and resources in
/// `Contents/Resources`.
#[cfg(feature = "dist")]
pub fn resource_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(|dir| dir.parent()).map(|dir| dir.join("Resources")))
        .unwrap_or_else(|| PathBuf::from("Resources"))
}

#[cfg(not(feature = "dist"))]
pub fn resource_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}
