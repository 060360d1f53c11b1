//! Terminal presentation for the navtree CLI.

pub mod context;
pub mod output;
pub mod sidebar;
pub mod style;
pub mod terminal;
pub mod theme;
