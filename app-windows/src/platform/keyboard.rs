//! Native key messages to shell key events.
//!
//! `WM_KEYDOWN` carries the hardware scan code in bits 16-23 of `lParam`,
//! with bit 24 set for extended keys. The `keycode` crate maps Windows scan
//! codes (extended ones prefixed with `0xE0`) to DOM codes.

use keycode::KeyMapping;
use mdug_core::keys::{KeyAction, KeyEvent, Modifiers, action_for};
use windows::Win32::Foundation::LPARAM;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyState, VIRTUAL_KEY, VK_CONTROL, VK_MENU, VK_SHIFT,
};

/// Scan code of a key message in the form `KeyMapping::Win` expects.
pub fn scan_code(lparam: LPARAM) -> u16 {
    let scan = ((lparam.0 >> 16) & 0xFF) as u16;
    let extended = (lparam.0 >> 24) & 1 == 1;
    if extended { 0xE000 | scan } else { scan }
}

pub fn key_event(lparam: LPARAM) -> Option<KeyEvent> {
    KeyEvent::from_native(KeyMapping::Win(scan_code(lparam)), current_modifiers())
}

/// Whether a `WM_KEYDOWN` with this `lParam` is a quit shortcut.
pub fn is_quit_key(lparam: LPARAM) -> bool {
    key_event(lparam)
        .and_then(|event| action_for(&event))
        .is_some_and(|action| action == KeyAction::Quit)
}

fn current_modifiers() -> Modifiers {
    Modifiers {
        primary: is_down(VK_CONTROL),
        alt: is_down(VK_MENU),
        shift: is_down(VK_SHIFT),
    }
}

fn is_down(key: VIRTUAL_KEY) -> bool {
    // High bit set means the key is down.
    unsafe { GetKeyState(key.0 as i32) < 0 }
}
