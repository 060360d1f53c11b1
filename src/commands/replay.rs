use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use navtree::{NavEvent, NavigationState};

use super::Session;
use crate::ui::output;
use crate::ui::theme::{icon, icons, icons_ascii};

pub fn cmd_replay(
    session: &Session,
    events: &Path,
    schema: Option<&Path>,
    initial_route: Option<&str>,
    show_routes: bool,
) -> Result<()> {
    let ui = &session.ui;
    let script = read_script(events)?;
    let events = parse_script(&script)?;

    let (_, schema) = session.load_schema(schema)?;
    let mut state = NavigationState::new(&schema, session.initial_route(initial_route));
    output::debug(
        ui,
        format!("Replaying {} events from {}", events.len(), state.route),
    );

    let arrow = icon(ui.unicode, icons::ARROW, icons_ascii::ARROW);
    for (line, event) in events {
        let outcome = match (&event, state.dispatch(event.clone())) {
            (NavEvent::RouteChanged { .. }, true) => "matched",
            (NavEvent::RouteChanged { .. }, false) => "no match",
            (NavEvent::BranchToggled { .. }, true) => "toggled",
            (NavEvent::BranchToggled { .. }, false) => "not found",
        };
        output::verbose(ui, format!("{:>3} {} {} ({})", line, arrow, event, outcome));
    }

    session.print_state(&state, show_routes)
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("failed to read events from stdin")?;
        return Ok(script);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))
}

/// Parse an event script into `(line number, event)` pairs.
///
/// Blank lines and `#` comments are skipped.
pub fn parse_script(script: &str) -> Result<Vec<(usize, NavEvent)>> {
    let mut events = Vec::new();
    for (i, line) in script.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = trimmed
            .parse::<NavEvent>()
            .map_err(|err| anyhow!("line {}: {}", i + 1, err))?;
        events.push((i + 1, event));
    }
    Ok(events)
}
