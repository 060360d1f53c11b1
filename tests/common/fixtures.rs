//! Reusable schemas.

use navtree::NavItem;

/// Home, Settings (Profile, Notifications) and a collapsed Admin menu
pub const SIDEBAR_TOML: &str = r#"
[[items]]
name = "Home"
route = "/"

[[items]]
name = "Settings"

[[items.children]]
name = "Profile"
route = "/profile"
route_params = { tab = "general" }

[[items.children]]
name = "Notifications"
route = "/notifications"

[[items]]
name = "Admin"

[[items.children]]
name = "Users"
route = "/users"
"#;

/// Same tree as [`SIDEBAR_TOML`]
pub const SIDEBAR_JSON: &str = r#"[
  { "name": "Home", "route": "/" },
  { "name": "Settings", "children": [
    { "name": "Profile", "route": "/profile", "routeParams": { "tab": "general" } },
    { "name": "Notifications", "route": "/notifications" }
  ] },
  { "name": "Admin", "children": [
    { "name": "Users", "route": "/users" }
  ] }
]"#;

/// Same tree as [`SIDEBAR_TOML`]
pub const SIDEBAR_YAML: &str = r#"
items:
  - name: Home
    route: /
  - name: Settings
    children:
      - name: Profile
        route: /profile
        route_params:
          tab: general
      - name: Notifications
        route: /notifications
  - name: Admin
    children:
      - name: Users
        route: /users
"#;

pub fn sidebar_schema() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "/"),
        NavItem::menu(
            "Settings",
            vec![
                NavItem::link("Profile", "/profile").with_param("tab", "general"),
                NavItem::link("Notifications", "/notifications"),
            ],
        ),
        NavItem::menu("Admin", vec![NavItem::link("Users", "/users")]),
    ]
}

/// Home plus Settings with a single Profile link
pub fn minimal_schema() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "/"),
        NavItem::menu("Settings", vec![NavItem::link("Profile", "/profile")]),
    ]
}
