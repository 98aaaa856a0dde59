//! Window creation and message handling.

use crate::app::App;
use crate::platform::handlers::{
    IDC_EDITOR_BUTTON, on_command, on_destroy, on_dpichanged, on_getminmaxinfo,
    on_settingchange, on_size,
};
use crate::platform::keyboard::is_quit_key;
use crate::ui::scale_for_dpi;
use crate::webview::init_webview;
use mdug_core::launch::Launch;
use std::ffi::c_void;
use windows::{
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM},
        Graphics::Gdi::{COLOR_BTNFACE, DEFAULT_GUI_FONT, GetStockObject, GetSysColorBrush},
        System::{
            Com::{COINIT_APARTMENTTHREADED, CoInitializeEx, CoUninitialize},
            LibraryLoader::GetModuleHandleW,
        },
        UI::{
            HiDpi::{
                DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, GetDpiForSystem, GetDpiForWindow,
                SetProcessDpiAwarenessContext,
            },
            WindowsAndMessaging::{
                BS_PUSHBUTTON, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DispatchMessageW,
                GWLP_USERDATA, GetClientRect, GetMessageW, GetSystemMetrics, GetWindowLongPtrW,
                HMENU, IDC_ARROW, LoadCursorW, MSG, PostMessageW, RegisterClassW, SM_CXSCREEN,
                SM_CYSCREEN, SW_SHOW, SendMessageW, SetForegroundWindow, SetWindowLongPtrW,
                ShowWindow, TranslateMessage, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND,
                WM_DESTROY, WM_DPICHANGED, WM_GETMINMAXINFO, WM_KEYDOWN, WM_SETFONT,
                WM_SETTINGCHANGE, WM_SIZE, WNDCLASSW, WS_CHILD, WS_CLIPCHILDREN,
                WS_OVERLAPPEDWINDOW, WS_TABSTOP, WS_VISIBLE,
            },
        },
    },
    core::{Result, w},
};

/// Asks the window to close; the process exits once it is destroyed.
pub fn request_close(hwnd: HWND) {
    unsafe {
        let _ = PostMessageW(Some(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0));
    }
}

/// Runs the application.
pub fn run(launch: Launch) -> Result<()> {
    unsafe {
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("MarkdugWindowClass");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: GetSysColorBrush(COLOR_BTNFACE),
            lpszClassName: class_name,
            ..Default::default()
        };

        let atom = RegisterClassW(&wc);
        debug_assert!(atom != 0);

        // Center window on screen
        let dpi = GetDpiForSystem();
        let width = scale_for_dpi(launch.config.window.width as i32, dpi);
        let height = scale_for_dpi(launch.config.window.height as i32, dpi);
        let screen_width = GetSystemMetrics(SM_CXSCREEN);
        let screen_height = GetSystemMetrics(SM_CYSCREEN);
        let (x, y) = if screen_width > 0 && screen_height > 0 {
            (
                ((screen_width - width) / 2).max(0),
                ((screen_height - height) / 2).max(0),
            )
        } else {
            (CW_USEDEFAULT, CW_USEDEFAULT)
        };

        // WS_CLIPCHILDREN keeps the toolbar paint off the button and WebView
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Markdug"),
            WS_OVERLAPPEDWINDOW | WS_CLIPCHILDREN,
            x,
            y,
            width,
            height,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        let app = Box::new(App::new(hwnd, launch));
        let app_ptr = Box::into_raw(app);
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, app_ptr as isize);

        let button = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            w!("BUTTON"),
            w!("Open in Editor"),
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(BS_PUSHBUTTON as u32),
            0,
            0,
            0,
            0,
            Some(hwnd),
            Some(HMENU(IDC_EDITOR_BUTTON as usize as *mut c_void)),
            Some(instance.into()),
            None,
        )?;
        let font = GetStockObject(DEFAULT_GUI_FONT);
        let _ = SendMessageW(
            button,
            WM_SETFONT,
            Some(WPARAM(font.0 as usize)),
            Some(LPARAM(1)),
        );

        let mut client = RECT::default();
        let _ = GetClientRect(hwnd, &mut client);
        if let Some(app) = get_app(hwnd) {
            app.set_editor_button(button);
            app.resize(client.right, client.bottom, GetDpiForWindow(hwnd));
        }

        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = SetForegroundWindow(hwnd);

        let webview_setup = get_app(hwnd).map(|app| (app.layout().content, app.theme()));
        if let Some((bounds, theme)) = webview_setup {
            init_webview(hwnd, bounds, theme, move |webview| {
                if let Some(app) = get_app(hwnd) {
                    app.attach_webview(webview);
                }
            });
        }

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).into() {
            // Quit shortcuts apply whichever child has focus.
            if msg.message == WM_KEYDOWN && is_quit_key(msg.lParam) {
                tracing::info!("quit key");
                request_close(hwnd);
                continue;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        CoUninitialize();
        Ok(())
    }
}

/// Gets the App instance from the window's user data.
///
/// # Safety
///
/// Caller must ensure only one mutable reference exists at a time.
/// Calling this twice without dropping the first reference is UB.
unsafe fn get_app(hwnd: HWND) -> Option<&'static mut App> {
    unsafe {
        let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut App;
        if ptr.is_null() { None } else { Some(&mut *ptr) }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_GETMINMAXINFO => on_getminmaxinfo(hwnd, lparam),
            WM_SIZE => match get_app(hwnd) {
                Some(app) => on_size(hwnd, app, lparam),
                // During window creation, before the App is attached
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            },
            WM_DPICHANGED => on_dpichanged(hwnd, lparam),
            WM_COMMAND => get_app(hwnd)
                .and_then(|app| on_command(app, wparam))
                .unwrap_or_else(|| DefWindowProcW(hwnd, msg, wparam, lparam)),
            WM_SETTINGCHANGE => match get_app(hwnd) {
                Some(app) => on_settingchange(app, lparam),
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            },
            WM_DESTROY => {
                let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut App;
                if !ptr.is_null() {
                    SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
                    drop(Box::from_raw(ptr));
                }
                on_destroy()
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
