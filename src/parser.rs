//! Schema parser
//!
//! Loads a navigation schema document from TOML, JSON or YAML. A document is
//! either a bare list of nodes (JSON/YAML only) or a table with an `items`
//! list. Unknown keys are rejected at every level:
//!
//! ```text
//! [[items]]
//! name = "Home"
//! route = "/"
//!
//! [[items]]
//! name = "Settings"
//! children = [{ name = "Profile", route = "/profile" }]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{NavError, NavResult};
use crate::models::{build_schema, NavItem, RawNavItem};

/// Serialization format of a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Toml,
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> NavResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(NavError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaTable {
    #[serde(default)]
    items: Vec<RawNavItem>,
}

/// Read and validate a schema file
pub fn load_schema(path: &Path) -> NavResult<Vec<NavItem>> {
    let format = SchemaFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_schema(&content, format, path)
}

/// Parse and validate schema content. `file` is only used in error messages.
pub fn parse_schema(content: &str, format: SchemaFormat, file: &Path) -> NavResult<Vec<NavItem>> {
    let parse_err = |message: String| NavError::SchemaParse {
        file: file.to_path_buf(),
        message,
    };

    let raw = match format {
        SchemaFormat::Toml => toml::from_str::<SchemaTable>(content)
            .map_err(|e| parse_err(e.to_string()))?
            .items,
        SchemaFormat::Json => {
            let parsed = if content.trim_start().starts_with('[') {
                serde_json::from_str::<Vec<RawNavItem>>(content)
            } else {
                serde_json::from_str::<SchemaTable>(content).map(|table| table.items)
            };
            parsed.map_err(|e| parse_err(e.to_string()))?
        }
        SchemaFormat::Yaml => {
            let is_list = serde_yaml_ng::from_str::<serde_yaml_ng::Value>(content)
                .map_err(|e| parse_err(e.to_string()))?
                .is_sequence();
            let parsed = if is_list {
                serde_yaml_ng::from_str::<Vec<RawNavItem>>(content)
            } else {
                serde_yaml_ng::from_str::<SchemaTable>(content).map(|table| table.items)
            };
            parsed.map_err(|e| parse_err(e.to_string()))?
        }
    };

    build_schema(raw)
}
