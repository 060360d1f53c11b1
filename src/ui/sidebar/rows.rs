use navtree::{DisplayKind, DisplayNode, RouteParams};

/// One visible line of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    /// Nesting level (0 = root)
    pub depth: usize,
    pub name: String,
    pub kind: RowKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Link {
        route: String,
        params: RouteParams,
        selected: bool,
    },
    Menu {
        expanded: bool,
    },
}

/// Flatten the tree into the rows a user can see.
///
/// Children of a collapsed branch are skipped entirely.
pub fn visible_rows(tree: &[DisplayNode]) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    push_rows(tree, 0, &mut rows);
    rows
}

fn push_rows(nodes: &[DisplayNode], depth: usize, rows: &mut Vec<SidebarRow>) {
    for node in nodes {
        match &node.kind {
            DisplayKind::Leaf {
                route,
                params,
                selected,
            } => rows.push(SidebarRow {
                depth,
                name: node.name.clone(),
                kind: RowKind::Link {
                    route: route.clone(),
                    params: params.clone(),
                    selected: *selected,
                },
            }),
            DisplayKind::Branch { children, expanded } => {
                rows.push(SidebarRow {
                    depth,
                    name: node.name.clone(),
                    kind: RowKind::Menu {
                        expanded: *expanded,
                    },
                });
                if *expanded {
                    push_rows(children, depth + 1, rows);
                }
            }
        }
    }
}
