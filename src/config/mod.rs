//! Configuration module for navtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NAVTREE_*)
//! 3. Project config (./.navtree.toml)
//! 4. User config (<config dir>/navtree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, NavConfig, OutputConfig, Verbosity};
