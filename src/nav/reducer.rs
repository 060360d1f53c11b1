//! Navigation events and the pure transition function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

use super::resolve::resolve;
use super::state::NavigationState;
use super::toggle::toggle;

/// Input to the navigation state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavEvent {
    /// The router moved to a new route
    RouteChanged { route: String },
    /// The user clicked a branch header
    BranchToggled { name: String },
}

impl NavEvent {
    pub fn route_changed(route: impl Into<String>) -> Self {
        Self::RouteChanged {
            route: route.into(),
        }
    }

    pub fn branch_toggled(name: impl Into<String>) -> Self {
        Self::BranchToggled { name: name.into() }
    }
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteChanged { route } => write!(f, "route {}", route),
            Self::BranchToggled { name } => write!(f, "toggle {}", name),
        }
    }
}

/// Parses `route <route>` or `toggle <name>`; anything else is rejected.
impl FromStr for NavEvent {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NavError::InvalidEvent {
            input: s.trim().to_string(),
        };

        let (keyword, arg) = s.trim().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(invalid());
        }

        match keyword {
            "route" => Ok(Self::route_changed(arg)),
            "toggle" => Ok(Self::branch_toggled(arg)),
            _ => Err(invalid()),
        }
    }
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    /// Route matched a leaf, or the toggle target was found
    pub hit: bool,
}

/// Apply `event` to `state`, reporting whether it hit anything.
pub fn transition(state: &NavigationState, event: NavEvent) -> Transition {
    match event {
        NavEvent::RouteChanged { route } => {
            let resolved = resolve(&state.tree, &route);
            Transition {
                state: NavigationState {
                    route,
                    tree: resolved.nodes,
                },
                hit: resolved.matched,
            }
        }
        NavEvent::BranchToggled { name } => {
            let toggled = toggle(&state.tree, &name);
            Transition {
                state: NavigationState {
                    route: state.route.clone(),
                    tree: toggled.nodes,
                },
                hit: toggled.found,
            }
        }
    }
}

/// Pure state transition
pub fn reduce(state: &NavigationState, event: NavEvent) -> NavigationState {
    transition(state, event).state
}
