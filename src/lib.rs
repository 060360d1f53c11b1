//! navtree - navigation-tree state engine for sidebar menus
//!
//! navtree turns a declarative navigation schema into a display tree that
//! follows the current route (selecting the active leaf and opening its
//! ancestors) while still letting the user expand and collapse branches.

pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod parser;

// Re-exports for convenience
pub use config::{Config, Verbosity};
pub use error::{NavError, NavResult};
pub use models::{build_schema, NavItem, NavItemKind, RawNavItem, RouteParams};
pub use nav::{
    materialize, reduce, resolve, toggle, DisplayKind, DisplayNode, NavEvent, NavigationState,
    Navigator, RouteSource,
};
pub use parser::{load_schema, parse_schema, SchemaFormat};
