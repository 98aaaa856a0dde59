//! Key-down monitor that ends the process on the quit shortcuts.
//!
//! `NSEvent.keyCode` is the virtual key code of the physical key, which the
//! `keycode` crate maps to DOM codes as `KeyMapping::Mac`.

use keycode::KeyMapping;
use mdug_core::keys::{KeyAction, KeyEvent, Modifiers, action_for};

/// Whether a key-down with this key code and modifier state quits.
pub fn is_quit_key(key_code: u16, modifiers: Modifiers) -> bool {
    KeyEvent::from_native(KeyMapping::Mac(key_code), modifiers)
        .and_then(|event| action_for(&event))
        .is_some_and(|action| action == KeyAction::Quit)
}

#[cfg(target_os = "macos")]
pub use monitor::install_quit_monitor;

#[cfg(target_os = "macos")]
mod monitor {
    use std::ptr::NonNull;

    use block2::RcBlock;
    use mdug_core::keys::Modifiers;
    use objc2::rc::Retained;
    use objc2::runtime::AnyObject;
    use objc2_app_kit::{NSApplication, NSEvent, NSEventMask, NSEventModifierFlags};
    use objc2_foundation::MainThreadMarker;

    use super::is_quit_key;

    fn modifiers(flags: NSEventModifierFlags) -> Modifiers {
        Modifiers {
            primary: flags.contains(NSEventModifierFlags::Command),
            alt: flags.contains(NSEventModifierFlags::Option),
            shift: flags.contains(NSEventModifierFlags::Shift),
        }
    }

    /// Installs a local monitor for key-down events in this application.
    /// Events are passed on unchanged unless they quit.
    pub fn install_quit_monitor() -> Option<Retained<AnyObject>> {
        let handler = RcBlock::new(|event: NonNull<NSEvent>| -> *mut NSEvent {
            // SAFETY: AppKit hands the monitor a valid event for the duration
            // of the call.
            let (key_code, flags) = unsafe {
                let key = event.as_ref();
                (key.keyCode(), key.modifierFlags())
            };
            if is_quit_key(key_code, modifiers(flags)) {
                tracing::info!(key_code, "quit key");
                if let Some(mtm) = MainThreadMarker::new() {
                    // SAFETY: called on the main thread with no sender.
                    unsafe { NSApplication::sharedApplication(mtm).terminate(None) };
                }
            }
            event.as_ptr()
        });
        // SAFETY: the handler returns the event it was given, as AppKit expects.
        unsafe { NSEvent::addLocalMonitorForEventsMatchingMask_handler(NSEventMask::KeyDown, &handler) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESCAPE: u16 = 0x35;
    const KEY_W: u16 = 0x0D;
    const KEY_Q: u16 = 0x0C;

    fn command() -> Modifiers {
        Modifiers {
            primary: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn escape_quits() {
        assert!(is_quit_key(ESCAPE, Modifiers::default()));
        assert!(is_quit_key(ESCAPE, command()));
    }

    #[test]
    fn command_w_quits() {
        assert!(is_quit_key(KEY_W, command()));
    }

    #[test]
    fn plain_or_shifted_w_does_not_quit() {
        assert!(!is_quit_key(KEY_W, Modifiers::default()));
        let shifted = Modifiers {
            shift: true,
            ..command()
        };
        assert!(!is_quit_key(KEY_W, shifted));
    }

    #[test]
    fn other_command_keys_pass_through() {
        assert!(!is_quit_key(KEY_Q, command()));
    }
}
