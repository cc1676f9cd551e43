use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Post - a single timestamped message on one user's timeline
///
/// Posts are immutable once created; fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-wide append sequence number, strictly increasing
    seq: u64,

    /// Message text as typed by the user
    message: String,

    /// Timestamp when the post was appended
    posted_at: DateTime<Utc>,
}

impl Post {
    pub fn new(seq: u64, message: impl Into<String>, posted_at: DateTime<Utc>) -> Self {
        Self {
            seq,
            message: message.into(),
            posted_at,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }
}

/// Feed ordering: newest timestamp first, later append first on a tie
///
/// `seq` is unique per store, so this is a total order over posts.
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.posted_at
        .cmp(&a.posted_at)
        .then_with(|| b.seq.cmp(&a.seq))
}
