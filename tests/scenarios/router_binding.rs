//! Scenario: Sidebar bound to a router
//!
//! Journey: a view owns a Navigator and syncs it on every render, while the
//! user occasionally clicks branch headers.
//!
//! Success Criteria:
//! - Re-rendering without a route change never undoes a manual collapse
//! - A real route change is dispatched exactly once

use navtree::nav::find;
use navtree::{Navigator, RouteSource};

use crate::common::sidebar_schema;

struct Router {
    history: Vec<String>,
}

impl Router {
    fn push(&mut self, route: &str) {
        self.history.push(route.to_string());
    }
}

impl RouteSource for Router {
    fn current_route(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }
}

/// SCENARIO: Renders between clicks do not fight the user
#[test]
fn scenario_sync_on_every_render() {
    let mut router = Router {
        history: vec!["/".to_string()],
    };
    let mut nav = Navigator::new(&sidebar_schema(), &router);

    router.push("/users");
    assert!(nav.sync(&router));
    assert!(find(nav.tree(), "Admin").unwrap().is_expanded());

    // User opens Settings and closes Admin; three renders follow.
    assert!(nav.toggle("Settings"));
    assert!(nav.toggle("Admin"));
    for _ in 0..3 {
        assert!(!nav.sync(&router));
    }

    assert!(find(nav.tree(), "Settings").unwrap().is_expanded());
    assert!(!find(nav.tree(), "Admin").unwrap().is_expanded());
    assert!(find(nav.tree(), "Users").unwrap().is_selected());

    router.push("/profile");
    assert!(nav.sync(&router));
    assert_eq!(nav.route(), "/profile");
    assert!(!find(nav.tree(), "Users").unwrap().is_selected());
    assert!(find(nav.tree(), "Profile").unwrap().is_selected());
}

/// SCENARIO: Clicking a name the sidebar does not have
#[test]
fn scenario_missing_toggle_target_is_harmless() {
    let mut nav = Navigator::new(&sidebar_schema(), "/");
    let before = nav.state().clone();

    assert!(!nav.toggle("Billing"));
    assert_eq!(nav.state(), &before);
}
