//! Path resolution for documents named on the command line.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Characters escaped in the path component of a `file://` URL.
/// `/` and `:` stay literal so drive letters and separators survive. `&` is
/// escaped because the URL also lands in an HTML attribute.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Resolves a user-supplied path: expands a leading `~` and makes the result
/// absolute against the current directory. Nothing is looked up on disk.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = expand_tilde(raw, home_dir().as_deref());
    std::path::absolute(&expanded).unwrap_or(expanded)
}

/// Expands `~` and `~/rest` against `home`. `~user` forms are left alone.
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/").or_else(|| {
        if MAIN_SEPARATOR == '\\' {
            raw.strip_prefix("~\\")
        } else {
            None
        }
    }) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(std::env::var_os)
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Window title for a document: its base name.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// `file://` URL of an absolute path.
pub fn file_url(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");

    let mut url = String::from("file://");
    if !path.starts_with('/') {
        url.push('/');
    }
    url.extend(utf8_percent_encode(&path, PATH_SEGMENT));
    url
}

/// `file://` URL of the directory containing `path`, with a trailing slash so
/// relative references resolve inside it.
pub fn directory_url(path: &Path) -> String {
    let mut url = file_url(path.parent().unwrap_or(path));
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests;
