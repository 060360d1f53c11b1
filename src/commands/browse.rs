use std::path::Path;

use anyhow::{bail, Context, Result};

use navtree::Navigator;

use super::Session;
use crate::ui::output;
use crate::ui::sidebar::run_interactive;

pub fn cmd_browse(session: &Session, schema: Option<&Path>, route: Option<&str>) -> Result<()> {
    let ui = &session.ui;
    if ui.json {
        bail!("browse is interactive and cannot emit JSON; use `navtree render --json`");
    }
    if !ui.caps.is_tty {
        bail!("browse needs an interactive terminal; use `navtree render` or `navtree replay`");
    }

    let (_, schema) = session.load_schema(schema)?;
    let route = session.initial_route(route);
    let mut nav = Navigator::new(&schema, route.as_str());

    run_interactive(&mut nav, session.render_options(true), ui.caps.width)
        .context("terminal error while browsing")?;

    output::verbose(ui, format!("Final route: {}", nav.route()));
    Ok(())
}
