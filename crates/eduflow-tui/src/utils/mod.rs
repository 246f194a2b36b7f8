//! Utility functions for string formatting.

pub mod format;

pub use format::{format_due, progress_bar, truncate_string};
