use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use navtree::nav::{branch_count, leaf_count};
use navtree::{materialize, NavItem};

use super::Session;
use crate::ui::output;
use crate::ui::style::{paint, Tone};
use crate::ui::theme::{icon, icons, icons_ascii};

pub fn cmd_check(session: &Session, schema: Option<&Path>) -> Result<()> {
    let ui = &session.ui;
    let (path, schema) = session.load_schema(schema)?;
    let tree = materialize(&schema);
    let links = leaf_count(&tree);
    let menus = branch_count(&tree);
    let shared = shared_routes(&schema);
    let ambiguous = shared_menu_names(&schema);

    if ui.json {
        let duplicates: Vec<_> = shared
            .iter()
            .map(|(route, items)| serde_json::json!({ "route": route, "items": items }))
            .collect();
        let repeated: Vec<_> = ambiguous
            .iter()
            .map(|(name, items)| serde_json::json!({ "name": name, "items": items }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "schema": path.display().to_string(),
                "valid": true,
                "links": links,
                "menus": menus,
                "duplicate_routes": duplicates,
                "repeated_menu_names": repeated,
            }))?
        );
        return Ok(());
    }

    let ok = icon(ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS);
    println!(
        "{}",
        paint(
            &format!("{} {}: {} links, {} menus", ok, path.display(), links, menus),
            Tone::Success,
            ui.color,
        )
    );
    for (route, items) in &shared {
        output::warn(
            ui,
            format!("Route '{}' is shared by: {}", route, items.join(", ")),
        );
    }
    for (name, items) in &ambiguous {
        output::warn(
            ui,
            format!(
                "Name '{}' is used by: {}; toggling it only reaches the first",
                name,
                items.join(", ")
            ),
        );
    }
    Ok(())
}

/// Routes reached by more than one link, with the `/`-joined item paths
pub fn shared_routes(schema: &[NavItem]) -> BTreeMap<String, Vec<String>> {
    let mut by_route: BTreeMap<String, Vec<String>> = BTreeMap::new();
    collect_routes(schema, "", &mut by_route);
    by_route.retain(|_, items| items.len() > 1);
    by_route
}

fn collect_routes(items: &[NavItem], parent: &str, out: &mut BTreeMap<String, Vec<String>>) {
    for item in items {
        let path = if parent.is_empty() {
            item.name.clone()
        } else {
            format!("{}/{}", parent, item.name)
        };
        match item.route() {
            Some(route) => out.entry(route.to_string()).or_default().push(path),
            None => collect_routes(item.children(), &path, out),
        }
    }
}

/// Names carried by more than one item where at least one is a menu.
///
/// Toggles address menus by name, so only the first of these in pre-order
/// can ever be toggled.
pub fn shared_menu_names(schema: &[NavItem]) -> BTreeMap<String, Vec<String>> {
    let mut by_name: BTreeMap<String, Vec<(String, bool)>> = BTreeMap::new();
    collect_names(schema, "", &mut by_name);
    by_name
        .into_iter()
        .filter(|(_, items)| items.len() > 1 && items.iter().any(|(_, menu)| *menu))
        .map(|(name, items)| (name, items.into_iter().map(|(path, _)| path).collect()))
        .collect()
}

fn collect_names(items: &[NavItem], parent: &str, out: &mut BTreeMap<String, Vec<(String, bool)>>) {
    for item in items {
        let path = if parent.is_empty() {
            item.name.clone()
        } else {
            format!("{}/{}", parent, item.name)
        };
        out.entry(item.name.clone())
            .or_default()
            .push((path.clone(), !item.is_link()));
        collect_names(item.children(), &path, out);
    }
}
