//! Manual expand/collapse of a single branch.

use super::node::{DisplayKind, DisplayNode};

/// Output of [`toggle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub nodes: Vec<DisplayNode>,
    /// Some node in the tree carried the requested name
    pub found: bool,
}

/// Flip `expanded` on the first node named `name`, in pre-order.
///
/// The lookup spans the whole tree, not one sibling list. Once a node has
/// matched, every remaining node is copied through untouched, even one that
/// shares the name. A leaf match consumes the lookup but changes nothing,
/// since leaves carry no expansion state.
pub fn toggle(tree: &[DisplayNode], name: &str) -> Toggled {
    let mut found = false;

    let nodes = tree
        .iter()
        .map(|node| {
            if found {
                return node.clone();
            }
            if node.name == name {
                found = true;
                return flip(node);
            }
            match &node.kind {
                DisplayKind::Branch { children, expanded } => {
                    let child = toggle(children, name);
                    found = child.found;
                    DisplayNode {
                        name: node.name.clone(),
                        kind: DisplayKind::Branch {
                            children: child.nodes,
                            expanded: *expanded,
                        },
                    }
                }
                DisplayKind::Leaf { .. } => node.clone(),
            }
        })
        .collect();

    Toggled { nodes, found }
}

fn flip(node: &DisplayNode) -> DisplayNode {
    match &node.kind {
        DisplayKind::Branch { children, expanded } => DisplayNode {
            name: node.name.clone(),
            kind: DisplayKind::Branch {
                children: children.clone(),
                expanded: !expanded,
            },
        },
        DisplayKind::Leaf { .. } => node.clone(),
    }
}
