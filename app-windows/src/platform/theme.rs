//! System theme detection.

use windows::UI::ViewManagement::{UIColorType, UISettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Detects the system theme preference using UISettings.
    /// Returns Light if detection fails.
    pub fn detect_system() -> Self {
        let Ok(settings) = UISettings::new() else {
            tracing::debug!("UISettings unavailable, assuming light theme");
            return Theme::Light;
        };

        let Ok(foreground) = settings.GetColorValue(UIColorType::Foreground) else {
            tracing::debug!("foreground colour unavailable, assuming light theme");
            return Theme::Light;
        };

        // https://learn.microsoft.com/en-us/windows/apps/desktop/modernize/ui/apply-windows-themes#know-when-dark-mode-is-enabled
        // Light foreground text means dark mode.
        let brightness = 5 * foreground.G as u32 + 2 * foreground.R as u32 + foreground.B as u32;
        if brightness > 8 * 128 {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Body background of rendered pages in this theme, as RGB.
    pub fn page_background(self) -> (u8, u8, u8) {
        match self {
            Theme::Light => (0xff, 0xff, 0xff),
            Theme::Dark => (0x0d, 0x11, 0x17),
        }
    }
}
