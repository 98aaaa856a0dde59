//! The document viewer shell.
//!
//! Owns the display surface and window handles plus the path of the document
//! on screen. The host constructs one `Shell` and drives it from its event
//! loop; every method runs on that thread.

use crate::document::Document;
use crate::renderer::RendererScript;
use crate::surface::{DisplaySurface, EDITOR_PATH, Launcher, Window};
use crate::template;
use std::path::{Path, PathBuf};

/// What the surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Placeholder,
    Loaded(PathBuf),
    Error(String),
}

pub struct Shell<S, W, L> {
    surface: S,
    window: W,
    launcher: L,
    renderer: RendererScript,
    current_path: Option<PathBuf>,
    state: DisplayState,
}

impl<S, W, L> Shell<S, W, L>
where
    S: DisplaySurface,
    W: Window,
    L: Launcher,
{
    pub fn new(surface: S, window: W, launcher: L, renderer: RendererScript) -> Self {
        Self {
            surface,
            window,
            launcher,
            renderer,
            current_path: None,
            state: DisplayState::Placeholder,
        }
    }

    /// Shows `file` if given, the usage placeholder otherwise.
    pub fn initialize(&mut self, file: Option<&str>) {
        match file {
            Some(raw) => self.load_document(raw),
            None => self.show_placeholder(),
        }
    }

    pub fn show_placeholder(&mut self) {
        tracing::info!("showing placeholder");
        self.surface.render(template::PLACEHOLDER_HTML, None);
        self.state = DisplayState::Placeholder;
    }

    /// Resolves `raw`, reads it and renders it.
    ///
    /// On failure an error page replaces the surface content and the current
    /// path is left as it was.
    pub fn load_document(&mut self, raw: &str) {
        let document = match Document::open(raw) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(path = %err.path().display(), kind = err.kind(), "load failed");
                self.show_error(&err.to_string());
                return;
            }
        };

        let html = document.to_html(&self.renderer);
        let base_url = document.base_url();
        self.window.set_title(&document.title());
        self.surface.render(&html, Some(&base_url));

        tracing::info!(
            path = %document.path().display(),
            bytes = document.text().len(),
            "document loaded"
        );

        let path = document.into_path();
        self.state = DisplayState::Loaded(path.clone());
        self.current_path = Some(path);
    }

    /// Opens the current document in the external editor. Does nothing when
    /// no document is loaded; a failed launch is only logged.
    pub fn open_in_external_editor(&mut self) {
        let Some(path) = self.current_path.as_deref() else {
            return;
        };
        let editor = Path::new(EDITOR_PATH);
        match self.launcher.spawn(editor, path) {
            Ok(()) => tracing::debug!(editor = %editor.display(), path = %path.display(), "editor launched"),
            Err(err) => tracing::debug!(editor = %editor.display(), error = %err, "editor launch failed"),
        }
    }

    /// Replaces the surface content with an error page showing `message`
    /// unescaped.
    pub fn show_error(&mut self, message: &str) {
        self.surface.render(&template::error_page(message), None);
        self.state = DisplayState::Error(message.to_string());
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
