//! Generators for schemas, routes and names.
//!
//! Names and routes come from small pools so that collisions (shared
//! routes, repeated names across subtrees) show up often.

use proptest::prelude::*;

use navtree::{DisplayNode, NavItem};

const NAMES: &[&str] = &["Home", "Settings", "Profile", "Admin", "Users", "Reports"];
const ROUTES: &[&str] = &["/", "/a", "/b", "/c", "/c/d", "/e?x=1"];

pub fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

/// A pool route, or one no schema leaf ever uses
pub fn route() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(ROUTES).prop_map(str::to_string),
        1 => Just("/nowhere".to_string()),
    ]
}

fn item() -> impl Strategy<Value = NavItem> {
    let leaf = (name(), prop::sample::select(ROUTES))
        .prop_map(|(name, route)| NavItem::link(name, route));

    leaf.prop_recursive(4, 48, 4, |inner| {
        (name(), prop::collection::vec(inner, 1..4))
            .prop_map(|(name, children)| NavItem::menu(name, children))
    })
}

pub fn schema() -> impl Strategy<Value = Vec<NavItem>> {
    prop::collection::vec(item(), 0..5)
}

/// `(name, route, selected, expanded)` for every node, in pre-order
pub fn flags(tree: &[DisplayNode]) -> Vec<(String, Option<String>, bool, bool)> {
    navtree::nav::preorder(tree)
        .map(|node| {
            (
                node.name.clone(),
                node.route().map(str::to_string),
                node.is_selected(),
                node.is_expanded(),
            )
        })
        .collect()
}
