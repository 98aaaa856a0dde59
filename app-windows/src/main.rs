//! Markdug Windows application.
//!
//! A resizable window hosting a WebView2 that shows one Markdown file, with a
//! toolbar button that opens the file in an external editor.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![cfg_attr(not(windows), allow(dead_code))]

#[cfg(windows)]
mod app;
mod paths;
#[cfg(windows)]
mod platform;
mod templates;
mod ui;
mod webview;

use mdug_core::launch::startup;

#[cfg(windows)]
fn main() -> windows::core::Result<()> {
    let Some((launch, _logging)) = startup(paths::resource_dir()) else {
        return Ok(());
    };
    platform::window::run(launch)
}

#[cfg(not(windows))]
fn main() -> std::process::ExitCode {
    let Some((_launch, _logging)) = startup(paths::resource_dir()) else {
        return std::process::ExitCode::SUCCESS;
    };
    tracing::error!("the WebView2 host only runs on Windows");
    eprintln!("mdug: this is the Windows host; build mdug_macos on macOS");
    std::process::ExitCode::FAILURE
}
