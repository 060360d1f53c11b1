//! Navigation tree engine
//!
//! Turns a static [`NavItem`](crate::models::NavItem) schema into a display
//! tree and keeps it in step with the current route and with the user's
//! expand/collapse clicks.
//!
//! # Module Structure
//!
//! - `node` - DisplayNode and read-only tree queries
//! - `materialize` - schema → display tree
//! - `resolve` - route → selection/expansion
//! - `toggle` - expand/collapse one branch by name
//! - `reducer` - events and the pure transition function
//! - `state` - NavigationState, Navigator and the router binding
//!
//! Every operation returns a new tree; inputs are never mutated.

mod materialize;
mod node;
mod reducer;
mod resolve;
mod state;
mod toggle;

pub use materialize::materialize;
pub use node::{
    branch_count, find, leaf_count, preorder, selected_routes, DisplayKind, DisplayNode, PreOrder,
};
pub use reducer::{reduce, transition, NavEvent, Transition};
pub use resolve::{resolve, Resolved};
pub use state::{NavigationState, Navigator, RouteSource};
pub use toggle::{toggle, Toggled};
