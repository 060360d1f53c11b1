//! Text rendering for sidebar rows.

use unicode_width::UnicodeWidthStr;

use crate::ui::style::{paint, paint_bold, Tone};
use crate::ui::theme::{icon, icons, icons_ascii};

use super::rows::{RowKind, SidebarRow};

/// How to draw the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub unicode: bool,
    pub color: bool,
    /// Append each link's route (and params) in an aligned column
    pub show_routes: bool,
}

/// Render rows to text, one line per row.
///
/// With a cursor, every line gets a two-column gutter and the active row is
/// marked.
pub fn render_sidebar(rows: &[SidebarRow], opts: &RenderOptions, cursor: Option<usize>) -> String {
    let column = if opts.show_routes {
        rows.iter()
            .filter(|row| matches!(row.kind, RowKind::Link { .. }))
            .map(|row| label_width(row, opts))
            .max()
            .unwrap_or(0)
    } else {
        0
    };

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if let Some(active) = cursor {
            if i == active {
                out.push_str(icon(opts.unicode, icons::CURSOR, icons_ascii::CURSOR));
                out.push(' ');
            } else {
                out.push_str("  ");
            }
        }
        out.push_str(&render_row(row, opts, column));
        out.push('\n');
    }
    out
}

fn render_row(row: &SidebarRow, opts: &RenderOptions, column: usize) -> String {
    let indent = "  ".repeat(row.depth);
    let glyph = row_icon(row, opts.unicode);

    let (glyph, name) = match &row.kind {
        RowKind::Link { selected: true, .. } => (
            paint_bold(glyph, Tone::Success, opts.color),
            paint_bold(&row.name, Tone::Success, opts.color),
        ),
        RowKind::Link { .. } => (glyph.to_string(), row.name.clone()),
        RowKind::Menu { .. } => (
            paint(glyph, Tone::Info, opts.color),
            paint(&row.name, Tone::Info, opts.color),
        ),
    };

    let mut line = format!("{}{} {}", indent, glyph, name);

    if let (true, RowKind::Link { route, params, .. }) = (opts.show_routes, &row.kind) {
        let pad = column.saturating_sub(label_width(row, opts));
        let mut target = route.clone();
        if !params.is_empty() {
            let pairs: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            target.push_str(&format!(" ({})", pairs.join(", ")));
        }
        line.push_str(&" ".repeat(pad + 2));
        line.push_str(&paint(&target, Tone::Dim, opts.color));
    }

    line
}

fn row_icon(row: &SidebarRow, unicode: bool) -> &'static str {
    match row.kind {
        RowKind::Link { selected: true, .. } => icon(unicode, icons::SELECTED, icons_ascii::SELECTED),
        RowKind::Link { .. } => icon(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED),
        RowKind::Menu { expanded: true } => icon(unicode, icons::EXPAND, icons_ascii::EXPAND),
        RowKind::Menu { expanded: false } => icon(unicode, icons::COLLAPSE, icons_ascii::COLLAPSE),
    }
}

/// Display width of indent + icon + name, without color codes
fn label_width(row: &SidebarRow, opts: &RenderOptions) -> usize {
    row.depth * 2 + row_icon(row, opts.unicode).width() + 1 + row.name.width()
}
