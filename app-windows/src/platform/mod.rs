//! Win32 platform abstractions.

pub mod handlers;
pub mod keyboard;
pub mod theme;
pub mod window;
