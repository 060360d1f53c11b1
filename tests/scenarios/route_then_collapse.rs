//! Scenario: Navigate, collapse, navigate again
//!
//! Journey: a user lands on the home page, follows the Profile link, closes
//! the Settings menu by hand, then the router reports /profile again.
//!
//! Success Criteria:
//! - The landing page selects Home and leaves Settings closed
//! - Following Profile opens Settings and moves the selection
//! - A manual collapse keeps the selection
//! - A route event re-opens the branch of the selected leaf

use navtree::nav::find;
use navtree::{NavEvent, NavigationState};

use crate::common::minimal_schema;

fn selected(state: &NavigationState, name: &str) -> bool {
    find(&state.tree, name).unwrap().is_selected()
}

fn expanded(state: &NavigationState, name: &str) -> bool {
    find(&state.tree, name).unwrap().is_expanded()
}

/// SCENARIO: Landing on the home page
#[test]
fn scenario_landing_selects_home() {
    let state = NavigationState::new(&minimal_schema(), "/");

    assert!(selected(&state, "Home"));
    assert!(!expanded(&state, "Settings"));
    assert!(!selected(&state, "Profile"));
}

/// SCENARIO: Full journey through route, toggle and route again
#[test]
fn scenario_route_toggle_route_journey() {
    let mut state = NavigationState::new(&minimal_schema(), "/");

    // Follow the Profile link
    assert!(state.dispatch(NavEvent::route_changed("/profile")));
    assert!(!selected(&state, "Home"));
    assert!(expanded(&state, "Settings"));
    assert!(selected(&state, "Profile"));

    // Close Settings by hand
    assert!(state.dispatch(NavEvent::branch_toggled("Settings")));
    assert!(!expanded(&state, "Settings"));
    assert!(selected(&state, "Profile"));
    assert_eq!(state.route, "/profile");

    // The same route arrives again and forces Settings open
    assert!(state.dispatch(NavEvent::route_changed("/profile")));
    assert!(expanded(&state, "Settings"));
    assert!(selected(&state, "Profile"));
}

/// SCENARIO: Leaving for a page the sidebar does not know
#[test]
fn scenario_unknown_route_clears_selection_but_keeps_menus_open() {
    let mut state = NavigationState::new(&minimal_schema(), "/profile");

    assert!(!state.dispatch(NavEvent::route_changed("/billing")));
    assert!(!selected(&state, "Profile"));
    assert!(!selected(&state, "Home"));
    assert!(expanded(&state, "Settings"));
}
