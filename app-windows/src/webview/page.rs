//! Per-process page file the WebView navigates to.

use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::Path;

use mdug_core::path::file_url;
use tempfile::{Builder, NamedTempFile};

/// A uniquely named HTML file in the cache directory, removed on drop.
///
/// Each viewer owns its own file, so two running viewers never show each
/// other's pages.
pub struct PageFile {
    file: NamedTempFile<File>,
}

impl PageFile {
    pub fn create(cache_dir: &Path) -> io::Result<Self> {
        std::fs::create_dir_all(cache_dir)?;
        let file = Builder::new()
            .prefix("page-")
            .suffix(".html")
            .tempfile_in(cache_dir)?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn url(&self) -> String {
        file_url(self.path())
    }

    /// Replaces the file's content with `html`.
    pub fn write(&mut self, html: &str) -> io::Result<()> {
        let file = self.file.as_file_mut();
        file.set_len(0)?;
        file.rewind()?;
        file.write_all(html.as_bytes())?;
        file.flush()
    }
}
