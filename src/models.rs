//! Navigation schema types
//!
//! A schema is the static, declarative description of the sidebar: an ordered
//! list of [`NavItem`]s, each either a link to a route or a menu of children.
//! Schemas are read-only to the engine; display state lives on
//! [`DisplayNode`](crate::nav::DisplayNode).

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Key-value parameters handed to the router alongside a route
pub type RouteParams = BTreeMap<String, String>;

/// One entry of the navigation schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Label, unique among siblings
    pub name: String,
    /// Link or menu payload
    pub kind: NavItemKind,
}

/// Leaf/branch payload of a [`NavItem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItemKind {
    /// Routable destination
    Link { route: String, params: RouteParams },
    /// Collapsible group of child items
    Menu { children: Vec<NavItem> },
}

impl NavItem {
    /// Create a link item without route params
    pub fn link(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NavItemKind::Link {
                route: route.into(),
                params: RouteParams::new(),
            },
        }
    }

    /// Create a menu item
    pub fn menu(name: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            name: name.into(),
            kind: NavItemKind::Menu { children },
        }
    }

    /// Add a route param. No-op on menu items.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NavItemKind::Link { params, .. } = &mut self.kind {
            params.insert(key.into(), value.into());
        }
        self
    }

    /// Route of a link item
    pub fn route(&self) -> Option<&str> {
        match &self.kind {
            NavItemKind::Link { route, .. } => Some(route),
            NavItemKind::Menu { .. } => None,
        }
    }

    /// Children of a menu item (empty for links)
    pub fn children(&self) -> &[NavItem] {
        match &self.kind {
            NavItemKind::Link { .. } => &[],
            NavItemKind::Menu { children } => children,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, NavItemKind::Link { .. })
    }
}

/// Wire form of a schema node, as written in TOML/JSON/YAML.
///
/// Every field is optional here so that malformed nodes reach
/// [`build_schema`] and get a precise error instead of a serde one. Unknown
/// keys are still a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNavItem {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(
        default,
        alias = "routeParams",
        skip_serializing_if = "Option::is_none"
    )]
    pub route_params: Option<RouteParams>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNavItem>>,
}

impl From<&NavItem> for RawNavItem {
    fn from(item: &NavItem) -> Self {
        match &item.kind {
            NavItemKind::Link { route, params } => Self {
                name: item.name.clone(),
                route: Some(route.clone()),
                route_params: (!params.is_empty()).then(|| params.clone()),
                children: None,
            },
            NavItemKind::Menu { children } => Self {
                name: item.name.clone(),
                route: None,
                route_params: None,
                children: Some(children.iter().map(RawNavItem::from).collect()),
            },
        }
    }
}

/// Validate wire nodes and convert them into a schema.
///
/// Rejects nodes carrying both `route` and `children`, neither of them, an
/// empty `children` list, `route_params` without a `route`, an empty name,
/// a name with surrounding whitespace, or a name already used by a sibling.
pub fn build_schema(raw: Vec<RawNavItem>) -> NavResult<Vec<NavItem>> {
    build_level(raw, "")
}

fn build_level(raw: Vec<RawNavItem>, parent: &str) -> NavResult<Vec<NavItem>> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(raw.len());

    for node in raw {
        let path = join_path(parent, &node.name);
        if !node.name.is_empty() && !seen.insert(node.name.clone()) {
            return Err(invalid(path, "duplicate sibling name"));
        }
        items.push(build_item(node, path)?);
    }

    Ok(items)
}

fn build_item(node: RawNavItem, path: String) -> NavResult<NavItem> {
    if node.name.trim().is_empty() {
        return Err(invalid(path, "empty name"));
    }
    if node.name.trim() != node.name {
        return Err(invalid(path, "leading or trailing whitespace in name"));
    }

    let kind = match (node.route, node.children) {
        (Some(_), Some(_)) => return Err(invalid(path, "both route and children")),
        (None, _) if node.route_params.is_some() => {
            return Err(invalid(path, "route_params without route"))
        }
        (None, None) => return Err(invalid(path, "neither route nor children")),
        (None, Some(children)) if children.is_empty() => {
            return Err(invalid(path, "empty children"))
        }
        (None, Some(children)) => NavItemKind::Menu {
            children: build_level(children, &path)?,
        },
        (Some(route), None) => NavItemKind::Link {
            route,
            params: node.route_params.unwrap_or_default(),
        },
    };

    Ok(NavItem {
        name: node.name,
        kind,
    })
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

fn invalid(path: String, reason: &str) -> NavError {
    NavError::InvalidSchema {
        path,
        reason: reason.to_string(),
    }
}
