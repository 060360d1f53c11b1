//! Property tests for branch toggling.

use proptest::prelude::*;

use navtree::nav::preorder;
use navtree::{materialize, resolve, toggle};

use crate::strategies::{flags, name, route, schema};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Only the first pre-order node with the name can change, and only its expansion.
    #[test]
    fn property_toggle_changes_at_most_one_node(
        schema in schema(),
        route in route(),
        target in name(),
    ) {
        let tree = resolve(&materialize(&schema), &route).nodes;
        let toggled = toggle(&tree, &target);

        let before = flags(&tree);
        let after = flags(&toggled.nodes);
        prop_assert_eq!(before.len(), after.len());

        let first = preorder(&tree).position(|node| node.name == target);
        prop_assert_eq!(toggled.found, first.is_some());

        for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
            prop_assert_eq!(&b.0, &a.0);
            prop_assert_eq!(&b.1, &a.1);
            prop_assert_eq!(b.2, a.2);

            let target_branch = Some(i) == first && b.1.is_none();
            if target_branch {
                prop_assert_eq!(a.3, !b.3);
            } else {
                prop_assert_eq!(a.3, b.3);
            }
        }
    }

    /// PROPERTY: Toggling a name that is absent reports not found and returns an equal tree.
    #[test]
    fn property_toggle_not_found_is_noop(schema in schema(), route in route()) {
        let tree = resolve(&materialize(&schema), &route).nodes;
        let toggled = toggle(&tree, "Not In Any Tree");

        prop_assert!(!toggled.found);
        prop_assert_eq!(toggled.nodes, tree);
    }

    /// PROPERTY: Toggling the same name twice restores the tree.
    #[test]
    fn property_toggle_twice_restores(schema in schema(), target in name()) {
        let tree = materialize(&schema);
        let once = toggle(&tree, &target);
        let twice = toggle(&once.nodes, &target);

        prop_assert_eq!(once.found, twice.found);
        prop_assert_eq!(twice.nodes, tree);
    }
}
