//! WebView2 hosting.

pub mod messages;
pub mod page;

#[cfg(windows)]
pub mod bridge;
#[cfg(windows)]
mod init;
#[cfg(windows)]
mod surface;
#[cfg(windows)]
mod view;

#[cfg(windows)]
pub use init::init_webview;
#[cfg(windows)]
pub use page::PageFile;
#[cfg(windows)]
pub use surface::WebViewSurface;
#[cfg(windows)]
pub use view::WebView;
