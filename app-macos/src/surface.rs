//! WKWebView as the shell's display surface and NSWindow as its window.

use mdug_core::surface::{DisplaySurface, Window};
use objc2::rc::Retained;
use objc2_app_kit::{NSAutoresizingMaskOptions, NSWindow};
use objc2_foundation::{MainThreadMarker, NSString, NSURL};
use objc2_web_kit::{WKWebView, WKWebViewConfiguration};

pub struct WebViewSurface {
    webview: Retained<WKWebView>,
}

impl WebViewSurface {
    /// Creates a web view filling `window` and makes it the content view.
    pub fn attach(mtm: MainThreadMarker, window: &NSWindow) -> Self {
        let frame = window.contentLayoutRect();
        // SAFETY: a fresh default configuration, created on the main thread.
        let webview = unsafe {
            let configuration = WKWebViewConfiguration::new(mtm);
            WKWebView::initWithFrame_configuration(mtm.alloc::<WKWebView>(), frame, &configuration)
        };
        webview.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable | NSAutoresizingMaskOptions::ViewHeightSizable,
        );
        window.setContentView(Some(&webview));
        Self { webview }
    }
}

impl DisplaySurface for WebViewSurface {
    fn render(&mut self, html: &str, base_url: Option<&str>) {
        let html = NSString::from_str(html);
        let base = base_url.and_then(|url| {
            let parsed = NSURL::URLWithString(&NSString::from_str(url));
            if parsed.is_none() {
                tracing::warn!(url, "base URL rejected, rendering without one");
            }
            parsed
        });
        // SAFETY: both arguments outlive the call; the returned navigation
        // handle is not needed.
        let _ = unsafe { self.webview.loadHTMLString_baseURL(&html, base.as_deref()) };
    }
}

/// The top-level window as seen by the shell.
pub struct NativeWindow {
    window: Retained<NSWindow>,
}

impl NativeWindow {
    pub fn new(window: Retained<NSWindow>) -> Self {
        Self { window }
    }
}

impl Window for NativeWindow {
    fn set_title(&mut self, title: &str) {
        self.window.setTitle(&NSString::from_str(title));
    }
}
