use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// navtree - route-aware sidebar navigation tree
#[derive(Parser, Debug)]
#[command(name = "navtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the navigation state as JSON instead of a rendered sidebar
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.navtree.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sidebar for a route
    Render {
        /// Schema file (.toml, .json, .yaml)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Current route (defaults to nav.initial_route)
        #[arg(short, long)]
        route: Option<String>,

        /// Toggle a branch by name after resolving the route (repeatable)
        #[arg(short, long = "toggle", value_name = "NAME")]
        toggle: Vec<String>,

        /// Show each link's route next to its name
        #[arg(long)]
        routes: bool,
    },

    /// Apply a script of events and render the final sidebar
    Replay {
        /// Event script, one `route <route>` or `toggle <name>` per line ('-' for stdin)
        events: PathBuf,

        /// Schema file (.toml, .json, .yaml)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Route the sidebar starts on (defaults to nav.initial_route)
        #[arg(long)]
        initial_route: Option<String>,

        /// Show each link's route next to its name
        #[arg(long)]
        routes: bool,
    },

    /// Validate a schema file
    Check {
        /// Schema file (.toml, .json, .yaml)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Browse the sidebar interactively
    Browse {
        /// Schema file (.toml, .json, .yaml)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Starting route (defaults to nav.initial_route)
        #[arg(short, long)]
        route: Option<String>,
    },
}
