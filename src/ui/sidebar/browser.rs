use navtree::{DisplayNode, Navigator};

use super::rows::{visible_rows, RowKind};

/// Browser action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle a menu, or follow a link
    Activate,
    /// Leave the browser
    Quit,
}

/// Cursor over the visible sidebar rows.
///
/// Following a link plays the router's part: it feeds the link's route back
/// into the navigator as a route change. Activating a menu toggles by name,
/// so when an earlier node in pre-order (possibly a hidden one) shares the
/// name, that node flips instead of the row under the cursor. `navtree check`
/// warns about such names.
#[derive(Debug, Clone, Default)]
pub struct Browser {
    cursor: usize,
}

impl Browser {
    /// Start on the first visible selected link, or the top row
    pub fn new(tree: &[DisplayNode]) -> Self {
        let cursor = visible_rows(tree)
            .iter()
            .position(|row| matches!(row.kind, RowKind::Link { selected: true, .. }))
            .unwrap_or(0);
        Self { cursor }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an action. Returns true when the browser should close.
    pub fn handle(&mut self, action: BrowseAction, nav: &mut Navigator) -> bool {
        match action {
            BrowseAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            BrowseAction::Down => {
                if self.cursor + 1 < visible_rows(nav.tree()).len() {
                    self.cursor += 1;
                }
                false
            }
            BrowseAction::Activate => {
                let rows = visible_rows(nav.tree());
                if let Some(row) = rows.get(self.cursor) {
                    match &row.kind {
                        RowKind::Link { route, .. } => {
                            nav.sync(route.as_str());
                        }
                        RowKind::Menu { .. } => {
                            nav.toggle(&row.name);
                        }
                    }
                }
                let visible = visible_rows(nav.tree()).len();
                if visible > 0 && self.cursor >= visible {
                    self.cursor = visible - 1;
                }
                false
            }
            BrowseAction::Quit => true,
        }
    }
}
