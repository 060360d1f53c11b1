#![no_main]

use libfuzzer_sys::fuzz_target;
use navtree::NavEvent;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Parsed events must print back to an equivalent line
        if let Ok(event) = line.parse::<NavEvent>() {
            let again: NavEvent = event
                .to_string()
                .parse()
                .expect("displayed event should parse");
            assert_eq!(again, event);
        }
    }
});
