//! Scripts injected into every page the WebView shows.

/// Forwards key presses inside the page to the native side, where the quit
/// shortcuts are decided. Runs before any page script.
pub const KEY_FORWARD_SCRIPT: &str = r#"
window.addEventListener('keydown', function (e) {
  if (!window.chrome || !window.chrome.webview) return;
  window.chrome.webview.postMessage(JSON.stringify({
    type: 'keyDown',
    code: e.code,
    ctrlKey: e.ctrlKey,
    metaKey: e.metaKey,
    altKey: e.altKey,
    shiftKey: e.shiftKey
  }));
}, true);
"#;
