//! Property tests for route resolution.

use proptest::prelude::*;

use navtree::nav::{preorder, selected_routes};
use navtree::{materialize, resolve, toggle, DisplayNode};

use crate::strategies::{flags, name, route, schema};

fn contains_selected(node: &DisplayNode) -> bool {
    preorder(node.children()).any(DisplayNode::is_selected)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolving the same tree against the same route twice agrees.
    #[test]
    fn property_resolve_is_deterministic(schema in schema(), route in route()) {
        let tree = materialize(&schema);
        let first = resolve(&tree, &route);
        let second = resolve(&tree, &route);
        prop_assert_eq!(flags(&first.nodes), flags(&second.nodes));
        prop_assert_eq!(first.matched, second.matched);
    }

    /// PROPERTY: Resolving an already resolved tree changes nothing.
    #[test]
    fn property_resolve_is_idempotent(schema in schema(), route in route()) {
        let once = resolve(&materialize(&schema), &route);
        let twice = resolve(&once.nodes, &route);
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: Exactly the leaves whose route equals the current route are selected.
    #[test]
    fn property_resolve_selects_matching_leaves(schema in schema(), route in route()) {
        let resolved = resolve(&materialize(&schema), &route);

        for node in preorder(&resolved.nodes) {
            if let Some(leaf_route) = node.route() {
                prop_assert_eq!(node.is_selected(), leaf_route == route);
            }
        }
        prop_assert_eq!(resolved.matched, !selected_routes(&resolved.nodes).is_empty());
    }

    /// PROPERTY: A route that matches no leaf clears any earlier selection.
    #[test]
    fn property_resolve_clears_stale_selection(schema in schema(), first in route()) {
        let before = resolve(&materialize(&schema), &first);
        let after = resolve(&before.nodes, "/nowhere");

        prop_assert!(!after.matched);
        prop_assert!(selected_routes(&after.nodes).is_empty());
    }

    /// PROPERTY: Every ancestor of a selected leaf is expanded.
    #[test]
    fn property_resolve_expands_ancestors(
        schema in schema(),
        collapse in prop::collection::vec(name(), 0..4),
        route in route(),
    ) {
        // Start from arbitrary manual collapses so stale flags are present.
        let mut tree = resolve(&materialize(&schema), &route).nodes;
        for name in &collapse {
            tree = toggle(&tree, name).nodes;
        }

        let resolved = resolve(&tree, &route);
        for node in preorder(&resolved.nodes) {
            if contains_selected(node) {
                prop_assert!(node.is_expanded(), "{} should be expanded", node.name);
            }
        }
    }

    /// PROPERTY: Branches with no matching descendant keep their expansion flag.
    #[test]
    fn property_resolve_keeps_unrelated_expansion(
        schema in schema(),
        opened in prop::collection::vec(name(), 0..4),
        route in route(),
    ) {
        let mut tree = materialize(&schema);
        for name in &opened {
            tree = toggle(&tree, name).nodes;
        }

        let resolved = resolve(&tree, &route);
        for (before, after) in preorder(&tree).zip(preorder(&resolved.nodes)) {
            if !after.is_leaf() && !contains_selected(after) {
                prop_assert_eq!(before.is_expanded(), after.is_expanded());
            }
        }
    }
}
