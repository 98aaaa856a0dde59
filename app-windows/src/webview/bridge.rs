//! WebView message bridge.

use super::messages::IncomingMessage;
use crate::platform::window::request_close;
use mdug_core::keys::{KeyAction, action_for};
use windows::Win32::Foundation::HWND;
use windows::core::PWSTR;

pub fn handle_webview_message(msg: &str, parent_hwnd: HWND) {
    let Some(message) = IncomingMessage::parse(msg) else {
        tracing::debug!(message = msg, "unrecognised webview message");
        return;
    };

    let Some(event) = message.key_event() else {
        return;
    };
    match action_for(&event) {
        Some(KeyAction::Quit) => {
            tracing::info!(code = ?event.code, "quit key in webview");
            request_close(parent_hwnd);
        }
        None => {}
    }
}

pub fn pwstr_to_string(pwstr: PWSTR) -> String {
    if pwstr.is_null() {
        return String::new();
    }
    unsafe { pwstr.to_string().unwrap_or_default() }
}
