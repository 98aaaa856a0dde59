//! WebView message types.

use mdug_core::keys::{KeyEvent, Modifiers};
use serde::Deserialize;

/// Messages from WebView to native.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum IncomingMessage {
    /// A key pressed while the page had focus.
    KeyDown {
        code: String,
        #[serde(default)]
        ctrl_key: bool,
        #[serde(default)]
        meta_key: bool,
        #[serde(default)]
        alt_key: bool,
        #[serde(default)]
        shift_key: bool,
    },
}

impl IncomingMessage {
    pub fn parse(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// The key event carried by a `KeyDown` message. Returns `None` when the
    /// code has no known mapping.
    pub fn key_event(&self) -> Option<KeyEvent> {
        match self {
            IncomingMessage::KeyDown {
                code,
                ctrl_key,
                meta_key,
                alt_key,
                shift_key,
            } => {
                let primary = if cfg!(target_os = "macos") {
                    *meta_key
                } else {
                    *ctrl_key
                };
                KeyEvent::from_dom_code(
                    code,
                    Modifiers {
                        primary,
                        alt: *alt_key,
                        shift: *shift_key,
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdug_core::keys::{KeyAction, action_for};

    #[test]
    fn parses_key_down() {
        let msg = IncomingMessage::parse(
            r#"{"type":"keyDown","code":"KeyW","ctrlKey":true,"metaKey":false,"altKey":false,"shiftKey":false}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            IncomingMessage::KeyDown {
                code: "KeyW".to_string(),
                ctrl_key: true,
                meta_key: false,
                alt_key: false,
                shift_key: false,
            }
        );
    }

    #[test]
    fn missing_modifiers_default_to_false() {
        let msg = IncomingMessage::parse(r#"{"type":"keyDown","code":"Escape"}"#).unwrap();
        let event = msg.key_event().unwrap();
        assert_eq!(event.modifiers, Modifiers::default());
        assert_eq!(action_for(&event), Some(KeyAction::Quit));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn ctrl_w_quits() {
        let msg =
            IncomingMessage::parse(r#"{"type":"keyDown","code":"KeyW","ctrlKey":true}"#).unwrap();
        assert_eq!(action_for(&msg.key_event().unwrap()), Some(KeyAction::Quit));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(IncomingMessage::parse(r#"{"type":"save","content":"x"}"#).is_none());
        assert!(IncomingMessage::parse("not json").is_none());
    }

    #[test]
    fn unknown_code_has_no_event() {
        let msg = IncomingMessage::parse(r#"{"type":"keyDown","code":"NotAKey"}"#).unwrap();
        assert!(msg.key_event().is_none());
    }
}
