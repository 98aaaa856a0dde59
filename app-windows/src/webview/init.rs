//! WebView2 initialization.

use super::WebView;
use super::bridge::{handle_webview_message, pwstr_to_string};
use crate::platform::theme::Theme;
use crate::templates::KEY_FORWARD_SCRIPT;
use crate::ui::Rect;
use std::ffi::c_void;
use webview2_com::Microsoft::Web::WebView2::Win32::{
    CreateCoreWebView2Environment, ICoreWebView2, ICoreWebView2Controller,
    ICoreWebView2Environment, ICoreWebView2WebMessageReceivedEventArgs,
};
use webview2_com::{
    AddScriptToExecuteOnDocumentCreatedCompletedHandler,
    CreateCoreWebView2ControllerCompletedHandler, CreateCoreWebView2EnvironmentCompletedHandler,
    WebMessageReceivedEventHandler,
};
use windows::Win32::Foundation::HWND;
use windows::Win32::System::Com::CoTaskMemFree;
use windows::core::{HSTRING, PWSTR};

/// Creates a WebView2 inside `hwnd` at `bounds` and calls `on_ready` with it.
/// Creation is async because it may need to start the runtime; `on_ready`
/// runs later on the UI thread.
pub fn init_webview(
    hwnd: HWND,
    bounds: Rect,
    theme: Theme,
    on_ready: impl FnOnce(WebView) + 'static,
) {
    let result = unsafe {
        CreateCoreWebView2Environment(&CreateCoreWebView2EnvironmentCompletedHandler::create(
            Box::new(move |error, env| {
                let Some(env) = env else {
                    tracing::error!(error = ?error, "WebView2 environment unavailable");
                    return Ok(());
                };
                create_controller(hwnd, bounds, theme, env, on_ready);
                Ok(())
            }),
        ))
    };
    if let Err(err) = result {
        tracing::error!(error = %err, "CreateCoreWebView2Environment failed");
    }
}

fn create_controller(
    hwnd: HWND,
    bounds: Rect,
    theme: Theme,
    env: ICoreWebView2Environment,
    on_ready: impl FnOnce(WebView) + 'static,
) {
    unsafe {
        let _ = env.CreateCoreWebView2Controller(
            hwnd,
            &CreateCoreWebView2ControllerCompletedHandler::create(Box::new(
                move |error, controller| {
                    let Some(controller) = controller else {
                        tracing::error!(error = ?error, "WebView2 controller unavailable");
                        return Ok(());
                    };
                    let Some(webview) = setup_webview(&controller, hwnd) else {
                        return Ok(());
                    };

                    let wv = WebView {
                        controller,
                        webview,
                    };
                    wv.set_background(theme);
                    let _ = wv.controller.SetIsVisible(true);
                    wv.set_bounds(bounds);
                    tracing::info!("webview ready");
                    on_ready(wv);
                    Ok(())
                },
            )),
        );
    }
}

fn setup_webview(controller: &ICoreWebView2Controller, parent_hwnd: HWND) -> Option<ICoreWebView2> {
    unsafe {
        let webview = controller.CoreWebView2().ok()?;

        // Key forwarding has to be in place before the first navigation.
        let _ = webview.AddScriptToExecuteOnDocumentCreated(
            &HSTRING::from(KEY_FORWARD_SCRIPT),
            &AddScriptToExecuteOnDocumentCreatedCompletedHandler::create(Box::new(
                |error, _id| {
                    if let Err(err) = error {
                        tracing::warn!(error = %err, "key forwarding script not installed");
                    }
                    Ok(())
                },
            )),
        );

        let mut token = 0i64;
        let _ = webview.add_WebMessageReceived(
            &WebMessageReceivedEventHandler::create(Box::new(
                move |_webview_opt, args: Option<ICoreWebView2WebMessageReceivedEventArgs>| {
                    let Some(args) = args else { return Ok(()) };
                    let mut message = PWSTR::null();
                    if args.TryGetWebMessageAsString(&mut message).is_err() || message.is_null() {
                        return Ok(());
                    }

                    let msg_str = pwstr_to_string(message);
                    CoTaskMemFree(Some(message.as_ptr() as *const c_void));
                    handle_webview_message(&msg_str, parent_hwnd);
                    Ok(())
                },
            )),
            &mut token,
        );

        Some(webview)
    }
}
