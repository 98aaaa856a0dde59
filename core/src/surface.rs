//! Capabilities the shell needs from the host platform.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Fixed location of the external editor.
#[cfg(target_os = "macos")]
pub const EDITOR_PATH: &str = "/usr/local/bin/subl";
#[cfg(windows)]
pub const EDITOR_PATH: &str = r"C:\Program Files\Sublime Text\subl.exe";
#[cfg(not(any(target_os = "macos", windows)))]
pub const EDITOR_PATH: &str = "/usr/bin/subl";

/// The embedded area that shows generated HTML.
pub trait DisplaySurface {
    /// Replaces the current page. `base_url` is where relative references
    /// resolve; `None` means the page has no base.
    fn render(&mut self, html: &str, base_url: Option<&str>);
}

/// The top-level window hosting the surface.
pub trait Window {
    fn set_title(&mut self, title: &str);
}

/// Starts external programs.
pub trait Launcher {
    /// Starts `program` with `arg` as its only argument and returns without
    /// waiting for it.
    fn spawn(&mut self, program: &Path, arg: &Path) -> io::Result<()>;
}

/// [`Launcher`] backed by `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn spawn(&mut self, program: &Path, arg: &Path) -> io::Result<()> {
        // The child is dropped, not waited on.
        Command::new(program)
            .arg(arg)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }
}
