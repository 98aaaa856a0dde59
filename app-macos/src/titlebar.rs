//! The `Open in Editor` button placed in the window's title bar.

pub const BUTTON_TITLE: &str = "Open in Editor";
pub const BUTTON_WIDTH: f64 = 120.0;
pub const BUTTON_HEIGHT: f64 = 22.0;
pub const BUTTON_MARGIN: f64 = 12.0;

/// Origin of the button in a title bar of `width` x `height` points:
/// right-aligned with a margin and vertically centred.
pub fn button_origin(width: f64, height: f64) -> (f64, f64) {
    (
        (width - BUTTON_MARGIN - BUTTON_WIDTH).max(0.0),
        ((height - BUTTON_HEIGHT) / 2.0).max(0.0),
    )
}

#[cfg(target_os = "macos")]
pub use native::add_editor_button;

#[cfg(target_os = "macos")]
mod native {
    use objc2::rc::Retained;
    use objc2::runtime::{AnyObject, Sel};
    use objc2_app_kit::{NSAutoresizingMaskOptions, NSButton, NSWindow, NSWindowButton};
    use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

    use super::{BUTTON_HEIGHT, BUTTON_TITLE, BUTTON_WIDTH, button_origin};

    /// Adds the button next to the title, sending `action` to `target` when
    /// clicked. The title bar view is the superview of the standard close
    /// button; returns `None` if the window has none.
    pub fn add_editor_button(
        mtm: MainThreadMarker,
        window: &NSWindow,
        target: &AnyObject,
        action: Sel,
    ) -> Option<Retained<NSButton>> {
        // SAFETY: the close button is part of the live window's view tree.
        let titlebar = unsafe {
            window
                .standardWindowButton(NSWindowButton::CloseButton)?
                .superview()
        }?;

        let title = NSString::from_str(BUTTON_TITLE);
        // SAFETY: `target` is the application delegate, which outlives the
        // window and implements `action`.
        let button = unsafe {
            NSButton::buttonWithTitle_target_action(&title, Some(target), Some(action), mtm)
        };

        let bounds = titlebar.bounds();
        let (x, y) = button_origin(bounds.size.width, bounds.size.height);
        button.setFrame(NSRect::new(
            NSPoint::new(x, y),
            NSSize::new(BUTTON_WIDTH, BUTTON_HEIGHT),
        ));
        button.setAutoresizingMask(NSAutoresizingMaskOptions::ViewMinXMargin);
        titlebar.addSubview(&button);
        Some(button)
    }
}
