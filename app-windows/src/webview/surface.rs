//! The WebView as the shell's display surface.

use super::{PageFile, WebView};
use mdug_core::surface::DisplaySurface;
use std::path::Path;
use windows::core::HSTRING;

/// Shows pages by writing them to this process's page file and navigating
/// to it.
///
/// A `file://` page may load the `file://` images its `<base>` points at,
/// which a string navigation may not, and it is not subject to the 2 MB
/// limit of `NavigateToString`.
pub struct WebViewSurface {
    webview: WebView,
    page: Option<PageFile>,
}

impl WebViewSurface {
    pub fn new(webview: WebView, cache_dir: &Path) -> Self {
        let page = match PageFile::create(cache_dir) {
            Ok(page) => Some(page),
            Err(err) => {
                tracing::warn!(dir = %cache_dir.display(), error = %err, "page cache unavailable, navigating to strings");
                None
            }
        };
        Self { webview, page }
    }

    fn navigate_to_page(&mut self, html: &str) -> Option<windows::core::Result<()>> {
        let page = self.page.as_mut()?;
        match page.write(html) {
            Ok(()) => {
                let url = HSTRING::from(page.url());
                Some(unsafe { self.webview.webview.Navigate(&url) })
            }
            Err(err) => {
                tracing::warn!(path = %page.path().display(), error = %err, "page file unwritable, navigating to string");
                None
            }
        }
    }
}

impl DisplaySurface for WebViewSurface {
    // The page carries its own `<base>` element, so `_base_url` needs no
    // separate handling here.
    fn render(&mut self, html: &str, _base_url: Option<&str>) {
        let result = match self.navigate_to_page(html) {
            Some(result) => result,
            None => unsafe { self.webview.webview.NavigateToString(&HSTRING::from(html)) },
        };
        if let Err(err) = result {
            tracing::error!(error = %err, "navigation failed");
        }
    }
}
