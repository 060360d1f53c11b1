//! Display tree node and read-only queries.

use serde::{Deserialize, Serialize};

use crate::models::RouteParams;

/// A schema node projected for display, carrying transient UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: DisplayKind,
}

/// Leaf/branch payload with its UI flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayKind {
    Leaf {
        route: String,
        #[serde(default, skip_serializing_if = "RouteParams::is_empty")]
        params: RouteParams,
        selected: bool,
    },
    Branch {
        children: Vec<DisplayNode>,
        expanded: bool,
    },
}

impl DisplayNode {
    /// Unselected leaf
    pub fn leaf(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DisplayKind::Leaf {
                route: route.into(),
                params: RouteParams::new(),
                selected: false,
            },
        }
    }

    /// Collapsed branch
    pub fn branch(name: impl Into<String>, children: Vec<DisplayNode>) -> Self {
        Self {
            name: name.into(),
            kind: DisplayKind::Branch {
                children,
                expanded: false,
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, DisplayKind::Leaf { .. })
    }

    /// Always false for leaves
    pub fn is_expanded(&self) -> bool {
        matches!(self.kind, DisplayKind::Branch { expanded: true, .. })
    }

    /// Always false for branches
    pub fn is_selected(&self) -> bool {
        matches!(self.kind, DisplayKind::Leaf { selected: true, .. })
    }

    pub fn route(&self) -> Option<&str> {
        match &self.kind {
            DisplayKind::Leaf { route, .. } => Some(route),
            DisplayKind::Branch { .. } => None,
        }
    }

    pub fn params(&self) -> Option<&RouteParams> {
        match &self.kind {
            DisplayKind::Leaf { params, .. } => Some(params),
            DisplayKind::Branch { .. } => None,
        }
    }

    /// Children of a branch (empty for leaves)
    pub fn children(&self) -> &[DisplayNode] {
        match &self.kind {
            DisplayKind::Leaf { .. } => &[],
            DisplayKind::Branch { children, .. } => children,
        }
    }
}

/// Depth-first, pre-order walk over a display tree.
pub struct PreOrder<'a> {
    stack: Vec<std::slice::Iter<'a, DisplayNode>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a DisplayNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    if !node.children().is_empty() {
                        self.stack.push(node.children().iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterate every node of `tree` in pre-order, regardless of expansion.
pub fn preorder(tree: &[DisplayNode]) -> PreOrder<'_> {
    PreOrder {
        stack: vec![tree.iter()],
    }
}

/// First node named `name` in pre-order
pub fn find<'a>(tree: &'a [DisplayNode], name: &str) -> Option<&'a DisplayNode> {
    preorder(tree).find(|node| node.name == name)
}

/// Routes of all selected leaves, in pre-order
pub fn selected_routes(tree: &[DisplayNode]) -> Vec<&str> {
    preorder(tree)
        .filter(|node| node.is_selected())
        .filter_map(DisplayNode::route)
        .collect()
}

pub fn leaf_count(tree: &[DisplayNode]) -> usize {
    preorder(tree).filter(|node| node.is_leaf()).count()
}

pub fn branch_count(tree: &[DisplayNode]) -> usize {
    preorder(tree).filter(|node| !node.is_leaf()).count()
}
