//! Handle to a created WebView2 controller.

use crate::platform::theme::Theme;
use crate::ui::Rect;
use webview2_com::Microsoft::Web::WebView2::Win32::{
    COREWEBVIEW2_COLOR, COREWEBVIEW2_MOVE_FOCUS_REASON_PROGRAMMATIC, ICoreWebView2,
    ICoreWebView2Controller, ICoreWebView2Controller2,
};
use windows::Win32::Foundation::RECT;
use windows::core::Interface;

#[derive(Clone)]
pub struct WebView {
    pub controller: ICoreWebView2Controller,
    pub webview: ICoreWebView2,
}

impl WebView {
    /// Sets the bounds of the WebView within its parent window.
    pub fn set_bounds(&self, rect: Rect) {
        unsafe {
            let rect = RECT {
                left: rect.x,
                top: rect.y,
                right: rect.right(),
                bottom: rect.bottom(),
            };
            let _ = self.controller.SetBounds(rect);
        }
    }

    /// Paints the area behind the page so there is no flash of the wrong
    /// colour before the first render.
    pub fn set_background(&self, theme: Theme) {
        let (r, g, b) = theme.page_background();
        if let Ok(controller2) = self.controller.cast::<ICoreWebView2Controller2>() {
            let color = COREWEBVIEW2_COLOR {
                A: 255,
                R: r,
                G: g,
                B: b,
            };
            let _ = unsafe { controller2.SetDefaultBackgroundColor(color) };
        }
    }

    pub fn focus(&self) {
        let _ = unsafe {
            self.controller
                .MoveFocus(COREWEBVIEW2_MOVE_FOCUS_REASON_PROGRAMMATIC)
        };
    }
}
