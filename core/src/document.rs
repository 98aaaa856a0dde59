//! Loading a Markdown file and turning it into a displayable page.

use crate::error::{LoadError, ReadFailure, Result};
use crate::escape::escape_template_literal;
use crate::path::{directory_url, display_name, expand_path};
use crate::renderer::RendererScript;
use crate::template;
use std::path::{Path, PathBuf};

/// A Markdown file read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Resolves `raw` and reads it as UTF-8.
    pub fn open(raw: &str) -> Result<Self> {
        Self::read(expand_path(raw))
    }

    /// Reads an already resolved path.
    pub fn read(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(LoadError::NotFound { path });
        }

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                return Err(LoadError::Read {
                    path,
                    source: ReadFailure::Io(err),
                });
            }
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { path, text }),
            Err(err) => Err(LoadError::Read {
                path,
                source: ReadFailure::Utf8(err.utf8_error()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Window title: the file's base name.
    pub fn title(&self) -> String {
        display_name(&self.path)
    }

    /// Base URL relative links and images resolve against.
    pub fn base_url(&self) -> String {
        directory_url(&self.path)
    }

    /// Complete HTML page rendering this document with `renderer`.
    pub fn to_html(&self, renderer: &RendererScript) -> String {
        template::document(
            &escape_template_literal(&self.text),
            renderer.source(),
            &self.base_url(),
        )
    }
}
