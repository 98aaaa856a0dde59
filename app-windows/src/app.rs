//! Application coordinator.

use crate::platform::theme::Theme;
use crate::ui::Layout;
use crate::webview::{WebView, WebViewSurface};
use mdug_core::launch::Launch;
use mdug_core::Shell;
use mdug_core::renderer::RendererScript;
use mdug_core::surface::{SystemLauncher, Window};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{SWP_NOZORDER, SetWindowPos, SetWindowTextW};
use windows::core::HSTRING;

pub type ViewerShell = Shell<WebViewSurface, NativeWindow, SystemLauncher>;

/// The top-level window as seen by the shell.
pub struct NativeWindow {
    hwnd: HWND,
}

impl Window for NativeWindow {
    fn set_title(&mut self, title: &str) {
        if let Err(err) = unsafe { SetWindowTextW(self.hwnd, &HSTRING::from(title)) } {
            tracing::warn!(error = %err, "SetWindowTextW failed");
        }
    }
}

/// Application coordinator, owns the shell and the native handles it needs.
///
/// The shell exists only once the WebView is ready; until then the file to
/// open waits in `launch`.
pub struct App {
    hwnd: HWND,
    launch: Launch,
    layout: Layout,
    theme: Theme,
    editor_button: Option<HWND>,
    webview: Option<WebView>,
    shell: Option<ViewerShell>,
}

impl App {
    /// Creates a new App instance bound to the given window.
    pub fn new(hwnd: HWND, launch: Launch) -> Self {
        Self {
            hwnd,
            launch,
            layout: Layout::default(),
            theme: Theme::detect_system(),
            editor_button: None,
            webview: None,
            shell: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_editor_button(&mut self, button: HWND) {
        self.editor_button = Some(button);
        self.place_editor_button();
    }

    /// Recomputes the layout and moves the child controls to match.
    pub fn resize(&mut self, width: i32, height: i32, dpi: u32) {
        self.layout = Layout::compute(width, height, dpi);
        self.place_editor_button();
        if let Some(webview) = &self.webview {
            webview.set_bounds(self.layout.content);
        }
    }

    fn place_editor_button(&self) {
        let Some(button) = self.editor_button else {
            return;
        };
        let rect = self.layout.editor_button;
        unsafe {
            let _ = SetWindowPos(
                button,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOZORDER,
            );
        }
    }

    /// Builds the shell around a freshly created WebView and shows the
    /// document named on the command line.
    pub fn attach_webview(&mut self, webview: WebView) {
        webview.set_bounds(self.layout.content);
        webview.focus();

        let surface = WebViewSurface::new(webview.clone(), &self.launch.data_dir.join("cache"));
        let window = NativeWindow { hwnd: self.hwnd };
        let renderer = RendererScript::load(&self.launch.resource_dir);
        tracing::info!(bundled = renderer.is_bundled(), "renderer loaded");
        let mut shell = Shell::new(surface, window, SystemLauncher, renderer);
        shell.initialize(self.launch.file.as_deref());

        self.webview = Some(webview);
        self.shell = Some(shell);
    }

    pub fn open_in_editor(&mut self) {
        if let Some(shell) = &mut self.shell {
            shell.open_in_external_editor();
        }
        // Give keyboard focus back to the page after the click.
        if let Some(webview) = &self.webview {
            webview.focus();
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Some(webview) = &self.webview {
            webview.set_background(theme);
        }
    }
}
