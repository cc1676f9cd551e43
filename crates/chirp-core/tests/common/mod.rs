use std::sync::Arc;

use chirp_core::clock::ManualClock;
use chirp_core::ops::{shared_store, SharedStore, UserStore};
use chirp_core::{AggregatedPost, AggregatorService, FollowService, Post, TimelineService};
use chrono::{TimeZone, Utc};

/// Services wired to one store and one manual clock
#[allow(dead_code)]
pub struct Feed {
    pub store: SharedStore,
    pub clock: Arc<ManualClock>,
    pub timeline: TimelineService,
    pub follows: FollowService,
    pub wall: AggregatorService,
}

/// Create a fresh feed with the clock at 2000-01-01 15:05:10 UTC
#[allow(dead_code)]
pub fn new_feed() -> Feed {
    let store = shared_store(UserStore::new());
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2000, 1, 1, 15, 5, 10).unwrap(),
    ));
    Feed {
        timeline: TimelineService::new(store.clone(), clock.clone()),
        follows: FollowService::new(store.clone()),
        wall: AggregatorService::new(store.clone()),
        store,
        clock,
    }
}

/// Messages of a timeline, in returned order
#[allow(dead_code)]
pub fn messages(posts: &[Post]) -> Vec<String> {
    posts.iter().map(|p| p.message().to_string()).collect()
}

/// `owner: message` pairs of a wall, in returned order
#[allow(dead_code)]
pub fn wall_lines(wall: &[AggregatedPost]) -> Vec<String> {
    wall.iter()
        .map(|p| format!("{}: {}", p.owner_name, p.post.message()))
        .collect()
}
