use serde::{Deserialize, Serialize};

use super::post::Post;
use super::user::UserId;

/// A post paired with the user whose timeline it came from
///
/// Built on demand when a wall is aggregated; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedPost {
    pub post: Post,
    pub owner_id: UserId,
    pub owner_name: String,
}

impl AggregatedPost {
    pub fn new(post: Post, owner_id: UserId, owner_name: impl Into<String>) -> Self {
        Self {
            post,
            owner_id,
            owner_name: owner_name.into(),
        }
    }
}
