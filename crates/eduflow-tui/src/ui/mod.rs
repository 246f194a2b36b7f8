//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout, title/tab/status bars and overlays
//! - `input`: keyboard event handling
//! - `styles`: color palette and text styles
//! - `views`: per-screen content (home, sign-in, dashboards)

pub mod input;
pub mod render;
pub mod styles;
pub mod views;
