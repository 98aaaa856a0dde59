//! Layout calculations for the viewer window.
//!
//! A toolbar strip at the top holds the editor button at its right edge; the
//! web view fills everything below it. All values are physical pixels.

/// A rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Returns the right edge of the rectangle.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge of the rectangle.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

// Layout dimensions at 96 DPI.
const TOOLBAR_HEIGHT: i32 = 32;
const BUTTON_WIDTH: i32 = 120;
const BUTTON_HEIGHT: i32 = 22;
const BUTTON_MARGIN: i32 = 12;

/// Layout information for the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// The toolbar strip above the content.
    pub toolbar: Rect,
    /// The "Open in Editor" button.
    pub editor_button: Rect,
    /// The web view area.
    pub content: Rect,
}

impl Layout {
    /// Computes layout for a client area of `width` x `height` at `dpi`.
    pub fn compute(width: i32, height: i32, dpi: u32) -> Self {
        let width = width.max(0);
        let height = height.max(0);

        let toolbar_height = scale_for_dpi(TOOLBAR_HEIGHT, dpi).min(height);
        let toolbar = Rect {
            x: 0,
            y: 0,
            width,
            height: toolbar_height,
        };

        let button_width = scale_for_dpi(BUTTON_WIDTH, dpi);
        let button_height = scale_for_dpi(BUTTON_HEIGHT, dpi);
        let margin = scale_for_dpi(BUTTON_MARGIN, dpi);
        let editor_button = Rect {
            x: (width - margin - button_width).max(0),
            y: ((toolbar_height - button_height) / 2).max(0),
            width: button_width,
            height: button_height,
        };

        let content = Rect {
            x: 0,
            y: toolbar_height,
            width,
            height: height - toolbar_height,
        };

        Self {
            toolbar,
            editor_button,
            content,
        }
    }
}

/// Scales a 96-DPI length to `dpi`.
pub fn scale_for_dpi(logical: i32, dpi: u32) -> i32 {
    (logical as i64 * dpi as i64 / 96) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_fills_below_toolbar() {
        let layout = Layout::compute(900, 700, 96);
        assert_eq!(layout.toolbar, Rect { x: 0, y: 0, width: 900, height: 32 });
        assert_eq!(layout.content, Rect { x: 0, y: 32, width: 900, height: 668 });
        assert_eq!(layout.content.bottom(), 700);
    }

    #[test]
    fn button_is_right_aligned_and_centred() {
        let layout = Layout::compute(900, 700, 96);
        assert_eq!(layout.editor_button.right(), 900 - 12);
        assert_eq!(layout.editor_button.y, 5);
        assert_eq!(layout.editor_button.height, 22);
    }

    #[test]
    fn scales_with_dpi() {
        let layout = Layout::compute(1800, 1400, 192);
        assert_eq!(layout.toolbar.height, 64);
        assert_eq!(layout.editor_button.width, 240);
        assert_eq!(layout.editor_button.right(), 1800 - 24);
    }

    #[test]
    fn tiny_window_never_goes_negative() {
        let layout = Layout::compute(50, 10, 96);
        assert_eq!(layout.toolbar.height, 10);
        assert_eq!(layout.content.height, 0);
        assert_eq!(layout.editor_button.x, 0);
        assert_eq!(layout.editor_button.y, 0);
    }
}
