//! Utility functions.
//!
//! This module provides clipboard helpers and layout configuration.

mod clipboard;
pub mod layout_config;

pub use clipboard::{copy_selected_series, copy_to_clipboard, format_selected};
pub use layout_config::LayoutConfig;
