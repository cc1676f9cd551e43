//! Registration order of the built-in commands

use chirp_engine::{ChirpApp, UNKNOWN_COMMAND};
use proptest::prelude::*;

#[test]
fn test_builtin_order_puts_wall_before_read() {
    let app = ChirpApp::with_system_clock().unwrap();
    let names: Vec<_> = app.router().signatures().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["post", "follows", "wall", "read"]);
}

#[test]
fn test_signatures_are_exposed_in_registration_order() {
    let app = ChirpApp::with_system_clock().unwrap();
    let sigs: Vec<_> = app.router().signatures().map(|(_, sig)| sig).collect();
    assert!(sigs[0].contains("->"));
    assert!(sigs[1].contains("follows"));
    assert!(sigs[2].contains("wall"));
}

proptest! {
    #[test]
    fn prop_punctuation_lines_are_unknown(line in "[ !?.,;:#@>]{0,8}") {
        let app = ChirpApp::with_system_clock().unwrap();
        prop_assert_eq!(app.handle(&line).unwrap(), Some(UNKNOWN_COMMAND.to_string()));
    }
}
