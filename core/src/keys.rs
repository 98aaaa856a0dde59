//! Key events and the actions they trigger.
//!
//! Keys are identified by their physical position as a DOM `KeyboardEvent.code`
//! value (`KeyMappingCode`), so the same mapping serves native scan codes and
//! events forwarded from inside the web view.

use keycode::{KeyMap, KeyMapping, KeyMappingCode};

/// Modifier state at the time of a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Cmd on macOS, Ctrl elsewhere.
    pub primary: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub code: KeyMappingCode,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// End the process.
    Quit,
}

impl KeyEvent {
    pub fn new(code: KeyMappingCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Builds an event from a native scan code (`KeyMapping::Win`,
    /// `KeyMapping::Mac`, ...). Returns `None` for codes with no DOM name.
    pub fn from_native(mapping: KeyMapping, modifiers: Modifiers) -> Option<Self> {
        let code = KeyMap::from_key_mapping(mapping).ok()?.code?;
        Some(Self::new(code, modifiers))
    }

    /// Builds an event from a DOM `KeyboardEvent.code` string such as
    /// `"KeyW"` or `"Escape"`.
    pub fn from_dom_code(code: &str, modifiers: Modifiers) -> Option<Self> {
        let code: KeyMappingCode = code.parse().ok()?;
        Some(Self::new(code, modifiers))
    }
}

/// Maps a key press to the action it triggers, if any.
///
/// Escape quits regardless of modifiers. W quits with the primary modifier
/// held, but not with Shift added.
pub fn action_for(event: &KeyEvent) -> Option<KeyAction> {
    match event.code {
        KeyMappingCode::Escape => Some(KeyAction::Quit),
        KeyMappingCode::KeyW if event.modifiers.primary && !event.modifiers.shift => {
            Some(KeyAction::Quit)
        }
        _ => None,
    }
}
