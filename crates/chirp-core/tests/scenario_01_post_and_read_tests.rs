mod common;

use chirp_core::ops::read_store;
use chirp_core::ChirpError;
use chrono::Duration;
use common::{messages, new_feed};

#[test]
fn test_scenario_alice_and_bob_post_then_bob_reads() {
    // Given: Alice posts once, Bob posts twice
    let feed = new_feed();
    feed.timeline.post("Alice", "hi").unwrap();
    feed.clock.advance(Duration::seconds(1));
    feed.timeline.post("Bob", "yo").unwrap();
    feed.clock.advance(Duration::seconds(1));
    feed.timeline.post("Bob", "gg").unwrap();

    // Then: Bob's timeline has his two posts, most recent first
    assert_eq!(messages(&feed.timeline.get_timeline("Bob").unwrap()), vec!["gg", "yo"]);
    assert_eq!(messages(&feed.timeline.get_timeline("Alice").unwrap()), vec!["hi"]);
}

#[test]
fn test_posts_are_visible_through_earlier_handles() {
    let feed = new_feed();
    let handle = {
        let mut store = chirp_core::ops::write_store(&feed.store).unwrap();
        store.get_or_create("Alice").unwrap()
    };

    feed.timeline.post("ALICE", "later").unwrap();

    let store = read_store(&feed.store).unwrap();
    let alice = store.user(handle).unwrap();
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.timeline().len(), 1);
}

#[test]
fn test_reading_creates_but_does_not_post() {
    let feed = new_feed();
    assert!(feed.timeline.get_timeline("Dave").unwrap().is_empty());

    let store = read_store(&feed.store).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_blank_user_name_fails_every_operation() {
    let feed = new_feed();

    assert!(matches!(
        feed.timeline.post("", "x"),
        Err(ChirpError::InvalidUserName { .. })
    ));
    assert!(matches!(
        feed.timeline.get_timeline("   "),
        Err(ChirpError::InvalidUserName { .. })
    ));
    assert!(matches!(
        feed.follows.set_following("\t", "Bob"),
        Err(ChirpError::InvalidUserName { .. })
    ));
    assert!(matches!(
        feed.wall.get_aggregated_posts(""),
        Err(ChirpError::InvalidUserName { .. })
    ));
    assert!(read_store(&feed.store).unwrap().is_empty());
}
