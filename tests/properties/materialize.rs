//! Property tests for schema materialization.

use proptest::prelude::*;

use navtree::nav::preorder;
use navtree::{materialize, DisplayNode, NavItem};

use crate::strategies::schema;

#[derive(Debug, PartialEq)]
enum Shape {
    Leaf(String, String),
    Branch(String, Vec<Shape>),
}

fn schema_shape(items: &[NavItem]) -> Vec<Shape> {
    items
        .iter()
        .map(|item| match item.route() {
            Some(route) => Shape::Leaf(item.name.clone(), route.to_string()),
            None => Shape::Branch(item.name.clone(), schema_shape(item.children())),
        })
        .collect()
}

fn tree_shape(nodes: &[DisplayNode]) -> Vec<Shape> {
    nodes
        .iter()
        .map(|node| match node.route() {
            Some(route) => Shape::Leaf(node.name.clone(), route.to_string()),
            None => Shape::Branch(node.name.clone(), tree_shape(node.children())),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Materializing keeps names, order, routes and nesting.
    #[test]
    fn property_materialize_preserves_shape(schema in schema()) {
        let tree = materialize(&schema);
        prop_assert_eq!(tree_shape(&tree), schema_shape(&schema));
    }

    /// PROPERTY: A fresh tree has nothing selected and nothing expanded.
    #[test]
    fn property_materialize_starts_closed(schema in schema()) {
        let tree = materialize(&schema);
        for node in preorder(&tree) {
            prop_assert!(!node.is_selected());
            prop_assert!(!node.is_expanded());
        }
    }

    /// PROPERTY: Materializing is a pure function of the schema.
    #[test]
    fn property_materialize_is_deterministic(schema in schema()) {
        prop_assert_eq!(materialize(&schema), materialize(&schema));
    }
}
