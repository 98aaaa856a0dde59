//! UI layout.

mod layout;

pub use layout::{Layout, Rect, scale_for_dpi};
