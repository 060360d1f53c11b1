//! Subcommand implementations

pub mod browse;
pub mod check;
pub mod render;
pub mod replay;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use navtree::{load_schema, Config, NavItem, NavigationState};

use crate::ui::context::UiContext;
use crate::ui::output;
use crate::ui::sidebar::{render_sidebar, visible_rows, RenderOptions};

/// Config and output settings shared by every subcommand
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    /// Discover config from the working directory (or `explicit`) and
    /// report any unknown keys.
    pub fn start(json: bool, verbose: u8, explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read the working directory")?;
        let loaded = Config::discover(&cwd, explicit)?;
        let ui = UiContext::new(json, verbose, &loaded.config);

        match &loaded.source {
            Some(path) => {
                output::debug(&ui, format!("Config: {}", path.display()));
                output::print_config_warnings(&ui, path, &loaded.warnings);
            }
            None => output::debug(&ui, "Config: built-in defaults"),
        }

        Ok(Self {
            config: loaded.config,
            ui,
        })
    }

    /// Schema path from the flag, falling back to `nav.schema`
    pub fn schema_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.nav.schema.clone())
    }

    pub fn load_schema(&self, flag: Option<&Path>) -> Result<(PathBuf, Vec<NavItem>)> {
        let path = self.schema_path(flag);
        let schema = load_schema(&path)
            .with_context(|| format!("failed to load schema {}", path.display()))?;
        output::debug(
            &self.ui,
            format!("Loaded {} top-level items from {}", schema.len(), path.display()),
        );
        Ok((path, schema))
    }

    pub fn initial_route(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .unwrap_or_else(|| self.config.nav.initial_route.clone())
    }

    pub fn render_options(&self, show_routes: bool) -> RenderOptions {
        RenderOptions {
            unicode: self.ui.unicode,
            color: self.ui.color,
            show_routes,
        }
    }

    /// Write the state to stdout as JSON or as a rendered sidebar
    pub fn print_state(&self, state: &NavigationState, show_routes: bool) -> Result<()> {
        if self.ui.json {
            println!("{}", serde_json::to_string_pretty(state)?);
        } else {
            let rows = visible_rows(&state.tree);
            print!(
                "{}",
                render_sidebar(&rows, &self.render_options(show_routes), None)
            );
        }
        Ok(())
    }
}
