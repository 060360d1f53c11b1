use std::path::Path;

use anyhow::Result;

use navtree::nav::selected_routes;
use navtree::{NavEvent, NavigationState};

use super::Session;
use crate::ui::output;

pub fn cmd_render(
    session: &Session,
    schema: Option<&Path>,
    route: Option<&str>,
    toggles: &[String],
    show_routes: bool,
) -> Result<()> {
    let ui = &session.ui;
    let (_, schema) = session.load_schema(schema)?;
    let route = session.initial_route(route);

    let mut state = NavigationState::new(&schema, route.as_str());
    if selected_routes(&state.tree).is_empty() {
        output::verbose(ui, format!("No link matches {}", route));
    } else {
        output::verbose(ui, format!("Resolved {}", route));
    }

    for name in toggles {
        if !state.dispatch(NavEvent::branch_toggled(name.as_str())) {
            output::warn(ui, format!("No nav item named '{}'", name));
        }
    }

    session.print_state(&state, show_routes)
}
