//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::NavResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Schema source and starting route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_schema")]
    pub schema: PathBuf,

    #[serde(default = "default_initial_route")]
    pub initial_route: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            initial_route: default_initial_route(),
        }
    }
}

fn default_schema() -> PathBuf {
    PathBuf::from("nav.toml")
}

fn default_initial_route() -> String {
    "/".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a level name, falling back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "quiet" => Self::Quiet,
            "verbose" => Self::Verbose,
            "debug" => Self::Debug,
            _ => Self::Normal,
        }
    }

    /// Combine with a `-v` count from the CLI. Flags only raise the level.
    pub fn with_flag_count(self, count: u8) -> Self {
        let from_flags = match count {
            0 => return self,
            1 => Self::Verbose,
            _ => Self::Debug,
        };
        self.max(from_flags)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub nav: NavConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the layered configuration for a working directory.
    ///
    /// `explicit` (from `--config`) replaces file discovery.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> NavResult<LoadedConfig> {
        loader::discover(project_root, explicit, loader::user_config_path())
    }
}
