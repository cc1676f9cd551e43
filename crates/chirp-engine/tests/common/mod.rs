use std::sync::Arc;

use chirp_core::clock::ManualClock;
use chirp_engine::ChirpApp;
use chrono::{TimeZone, Utc};

/// An app on a manual clock starting at 2000-01-01 15:05:10 UTC
#[allow(dead_code)]
pub fn new_app() -> (ChirpApp, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2000, 1, 1, 15, 5, 10).unwrap(),
    ));
    let app = ChirpApp::new(clock.clone()).unwrap();
    (app, clock)
}

/// Handle a line that must succeed
#[allow(dead_code)]
pub fn run(app: &ChirpApp, line: &str) -> Option<String> {
    app.handle(line)
        .unwrap_or_else(|e| panic!("command {:?} failed: {}", line, e))
}
