//! Schema → display tree projection.

use crate::models::{NavItem, NavItemKind};

use super::node::{DisplayKind, DisplayNode};

/// Project a schema into a fresh display tree.
///
/// Shape, names and order are preserved; every leaf starts unselected and
/// every branch collapsed.
pub fn materialize(schema: &[NavItem]) -> Vec<DisplayNode> {
    schema.iter().map(materialize_item).collect()
}

fn materialize_item(item: &NavItem) -> DisplayNode {
    let kind = match &item.kind {
        NavItemKind::Link { route, params } => DisplayKind::Leaf {
            route: route.clone(),
            params: params.clone(),
            selected: false,
        },
        NavItemKind::Menu { children } => DisplayKind::Branch {
            children: materialize(children),
            expanded: false,
        },
    };

    DisplayNode {
        name: item.name.clone(),
        kind,
    }
}
