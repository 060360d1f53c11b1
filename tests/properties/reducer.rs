//! Property tests for event replay.

use proptest::prelude::*;

use navtree::{reduce, NavEvent, NavigationState};

use crate::strategies::{name, route, schema};

fn event() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        route().prop_map(NavEvent::route_changed),
        name().prop_map(NavEvent::branch_toggled),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `dispatch` and `reduce` agree, and route events set the route.
    #[test]
    fn property_dispatch_matches_reduce(
        schema in schema(),
        initial in route(),
        events in prop::collection::vec(event(), 0..12),
    ) {
        let mut state = NavigationState::new(&schema, initial.as_str());
        for event in events {
            let expected = reduce(&state, event.clone());
            let previous_route = state.route.clone();
            state.dispatch(event.clone());
            prop_assert_eq!(&state, &expected);

            match event {
                NavEvent::RouteChanged { route } => prop_assert_eq!(&state.route, &route),
                NavEvent::BranchToggled { .. } => prop_assert_eq!(&state.route, &previous_route),
            }
        }
    }

    /// PROPERTY: Textual events parse back to the same event.
    #[test]
    fn property_event_display_parses_back(event in event()) {
        let parsed: NavEvent = event.to_string().parse().unwrap();
        prop_assert_eq!(parsed, event);
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_event_parse_never_panics(input in "(?s).{0,64}") {
        let _ = input.parse::<NavEvent>();
    }
}
