//! Route → selection/expansion resolution.

use super::node::{DisplayKind, DisplayNode};

/// Output of [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub nodes: Vec<DisplayNode>,
    /// At least one leaf in the resolved level matched the route
    pub matched: bool,
}

/// Recompute selection against `route`, returning a new tree.
///
/// Every leaf gets `selected = (leaf.route == route)`, so a stale selection
/// is cleared when nothing matches. A branch keeps its current `expanded`
/// flag and is forced open when any descendant matched. Leaves sharing the
/// same route are all selected.
pub fn resolve(tree: &[DisplayNode], route: &str) -> Resolved {
    let mut matched = false;

    let nodes = tree
        .iter()
        .map(|node| {
            let kind = match &node.kind {
                DisplayKind::Leaf {
                    route: leaf_route,
                    params,
                    ..
                } => {
                    let selected = leaf_route == route;
                    matched |= selected;
                    DisplayKind::Leaf {
                        route: leaf_route.clone(),
                        params: params.clone(),
                        selected,
                    }
                }
                DisplayKind::Branch { children, expanded } => {
                    let child = resolve(children, route);
                    matched |= child.matched;
                    DisplayKind::Branch {
                        children: child.nodes,
                        expanded: child.matched || *expanded,
                    }
                }
            };
            DisplayNode {
                name: node.name.clone(),
                kind,
            }
        })
        .collect();

    Resolved { nodes, matched }
}
