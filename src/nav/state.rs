//! Navigation state container and router binding.

use serde::{Deserialize, Serialize};

use crate::models::NavItem;

use super::materialize::materialize;
use super::node::DisplayNode;
use super::reducer::{transition, NavEvent};
use super::resolve::resolve;

/// Display tree plus the route it was last resolved against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub route: String,
    pub tree: Vec<DisplayNode>,
}

impl NavigationState {
    /// Materialize `schema` and resolve it against `initial_route`
    pub fn new(schema: &[NavItem], initial_route: impl Into<String>) -> Self {
        let route = initial_route.into();
        let tree = resolve(&materialize(schema), &route).nodes;
        Self { route, tree }
    }

    /// Replace this state with the result of `event`.
    ///
    /// Returns whether the route matched a leaf or the toggle target exists.
    pub fn dispatch(&mut self, event: NavEvent) -> bool {
        let next = transition(self, event);
        *self = next.state;
        next.hit
    }
}

/// Read side of the router
pub trait RouteSource {
    fn current_route(&self) -> &str;
}

impl RouteSource for str {
    fn current_route(&self) -> &str {
        self
    }
}

impl RouteSource for String {
    fn current_route(&self) -> &str {
        self
    }
}

/// Owns a [`NavigationState`] for the lifetime of a sidebar view.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    pub fn new<R: RouteSource + ?Sized>(schema: &[NavItem], router: &R) -> Self {
        Self {
            state: NavigationState::new(schema, router.current_route()),
        }
    }

    pub fn from_state(state: NavigationState) -> Self {
        Self { state }
    }

    /// Dispatch a route change if the router moved since the last sync.
    ///
    /// Returns true when an event was dispatched.
    pub fn sync<R: RouteSource + ?Sized>(&mut self, router: &R) -> bool {
        let route = router.current_route();
        if route == self.state.route {
            return false;
        }
        self.state.dispatch(NavEvent::route_changed(route));
        true
    }

    /// Flip a branch by name. Returns whether the name was found.
    pub fn toggle(&mut self, name: &str) -> bool {
        self.state.dispatch(NavEvent::branch_toggled(name))
    }

    pub fn dispatch(&mut self, event: NavEvent) -> bool {
        self.state.dispatch(event)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn tree(&self) -> &[DisplayNode] {
        &self.state.tree
    }

    pub fn route(&self) -> &str {
        &self.state.route
    }

    pub fn into_state(self) -> NavigationState {
        self.state
    }
}
