//! navtree CLI - render and exercise route-aware sidebar navigation trees
//!
//! Usage: navtree <COMMAND>
//!
//! Commands:
//!   render  Render the sidebar for a route
//!   replay  Apply a script of events and render the final sidebar
//!   check   Validate a schema file
//!   browse  Browse the sidebar interactively

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let ui = UiContext::new(cli.json, cli.verbose, &navtree::Config::default());
        ui::output::error(&ui, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let session = commands::Session::start(cli.json, cli.verbose, cli.config.as_deref())?;

    match &cli.command {
        Commands::Render {
            schema,
            route,
            toggle,
            routes,
        } => commands::render::cmd_render(&session, schema.as_deref(), route.as_deref(), toggle, *routes),
        Commands::Replay {
            events,
            schema,
            initial_route,
            routes,
        } => commands::replay::cmd_replay(
            &session,
            events,
            schema.as_deref(),
            initial_route.as_deref(),
            *routes,
        ),
        Commands::Check { schema } => commands::check::cmd_check(&session, schema.as_deref()),
        Commands::Browse { schema, route } => {
            commands::browse::cmd_browse(&session, schema.as_deref(), route.as_deref())
        }
    }
}
