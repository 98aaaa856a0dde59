//! Markdug macOS application.
//!
//! An AppKit window hosting a WKWebView that shows one Markdown file, with a
//! title-bar button that opens the file in an external editor.

#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

#[cfg(target_os = "macos")]
mod app;
mod keyboard;
mod paths;
#[cfg(target_os = "macos")]
mod surface;
mod titlebar;

use mdug_core::launch::startup;
use std::process::ExitCode;

#[cfg(target_os = "macos")]
fn main() -> ExitCode {
    let Some((launch, logging)) = startup(paths::resource_dir()) else {
        return ExitCode::SUCCESS;
    };
    let Some(mtm) = objc2_foundation::MainThreadMarker::new() else {
        tracing::error!("not started on the main thread");
        return ExitCode::FAILURE;
    };
    app::run(mtm, launch, logging);
    ExitCode::SUCCESS
}

#[cfg(not(target_os = "macos"))]
fn main() -> ExitCode {
    let Some((_launch, _logging)) = startup(paths::resource_dir()) else {
        return ExitCode::SUCCESS;
    };
    tracing::error!("the AppKit host only runs on macOS");
    eprintln!("mdug: this is the macOS host; build mdug_windows on Windows");
    ExitCode::FAILURE
}
