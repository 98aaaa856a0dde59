//! Window message handlers.

use crate::app::App;
use crate::platform::theme::Theme;
use crate::ui::scale_for_dpi;
use mdug_core::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM},
    UI::{
        HiDpi::GetDpiForWindow,
        WindowsAndMessaging::{
            BN_CLICKED, MINMAXINFO, PostQuitMessage, SWP_NOACTIVATE, SWP_NOZORDER, SetWindowPos,
        },
    },
};
use windows::core::{PCWSTR, w};

/// Control id of the "Open in Editor" button.
pub const IDC_EDITOR_BUTTON: u32 = 100;

/// WM_GETMINMAXINFO: Enforce minimum window size during resize.
pub fn on_getminmaxinfo(hwnd: HWND, lparam: LPARAM) -> LRESULT {
    let info = lparam.0 as *mut MINMAXINFO;
    if !info.is_null() {
        unsafe {
            let dpi = GetDpiForWindow(hwnd);
            (*info).ptMinTrackSize.x = scale_for_dpi(MIN_WINDOW_WIDTH as i32, dpi);
            (*info).ptMinTrackSize.y = scale_for_dpi(MIN_WINDOW_HEIGHT as i32, dpi);
        }
    }
    LRESULT(0)
}

/// WM_SIZE: Lay out the button and the WebView for the new client size.
pub fn on_size(hwnd: HWND, app: &mut App, lparam: LPARAM) -> LRESULT {
    let width = (lparam.0 & 0xFFFF) as i32;
    let height = ((lparam.0 >> 16) & 0xFFFF) as i32;
    let dpi = unsafe { GetDpiForWindow(hwnd) };
    app.resize(width, height, dpi);
    LRESULT(0)
}

/// WM_DPICHANGED: Adopt the size Windows suggests for the new monitor.
pub fn on_dpichanged(hwnd: HWND, lparam: LPARAM) -> LRESULT {
    let suggested = lparam.0 as *const RECT;
    if !suggested.is_null() {
        unsafe {
            let rect = *suggested;
            let _ = SetWindowPos(
                hwnd,
                None,
                rect.left,
                rect.top,
                rect.right - rect.left,
                rect.bottom - rect.top,
                SWP_NOZORDER | SWP_NOACTIVATE,
            );
        }
    }
    LRESULT(0)
}

/// WM_COMMAND: Handle clicks on the toolbar button.
pub fn on_command(app: &mut App, wparam: WPARAM) -> Option<LRESULT> {
    let control_id = (wparam.0 & 0xFFFF) as u32;
    let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
    if control_id == IDC_EDITOR_BUTTON && notification == BN_CLICKED {
        app.open_in_editor();
        return Some(LRESULT(0));
    }
    None
}

/// WM_SETTINGCHANGE: Follow system theme changes.
pub fn on_settingchange(app: &mut App, lparam: LPARAM) -> LRESULT {
    // lparam points to the setting name as a wide string
    if lparam.0 != 0 {
        let setting = PCWSTR::from_raw(lparam.0 as *const u16);

        // "ImmersiveColorSet" is broadcast when system theme changes
        if unsafe { setting.as_wide() == w!("ImmersiveColorSet").as_wide() } {
            let theme = Theme::detect_system();
            tracing::debug!(theme = ?theme, "system theme changed");
            app.set_theme(theme);
        }
    }
    LRESULT(0)
}

/// WM_DESTROY: Exit the message loop.
pub fn on_destroy() -> LRESULT {
    unsafe { PostQuitMessage(0) };
    LRESULT(0)
}
