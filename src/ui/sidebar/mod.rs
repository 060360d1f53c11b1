//! Sidebar presentation
//!
//! Renders a navigation display tree as an indented terminal menu and drives
//! the interactive browser.
//!
//! # Module Structure
//!
//! - `rows` - visible-row flattening (collapsed branches hide children)
//! - `render` - row → text rendering
//! - `browser` - cursor state and row activation
//! - `input` - key mapping and the raw-mode loop

mod browser;
mod input;
mod render;
mod rows;

pub use input::run_interactive;
pub use render::{render_sidebar, RenderOptions};
pub use rows::visible_rows;
