#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use navtree::{parse_schema, NavEvent, NavigationState, SchemaFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any schema that validates must survive materialize/resolve/toggle
        if let Ok(schema) = parse_schema(content, SchemaFormat::Json, Path::new("fuzz.json")) {
            let mut state = NavigationState::new(&schema, "/");
            if let Some(first) = schema.first() {
                state.dispatch(NavEvent::branch_toggled(first.name.as_str()));
            }
            state.dispatch(NavEvent::route_changed("/"));
        }
    }
});
