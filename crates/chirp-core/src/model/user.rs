use serde::{Deserialize, Serialize};

use super::post::Post;

/// Stable handle to a user inside a `UserStore`
///
/// Handles stay valid for the lifetime of the store (users are never deleted),
/// so a mutation made through one handle is visible through every other copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub(crate) usize);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// User - owner of a timeline and of a set of follow edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Arena handle of this user
    pub id: UserId,

    /// Display name, in the casing first seen by the store
    pub name: String,

    /// Own posts in append order (not necessarily time-sorted)
    timeline: Vec<Post>,

    /// Followed users in first-follow order, without duplicates
    following: Vec<UserId>,
}

impl User {
    /// Create a user with an empty timeline and no follow edges
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            timeline: Vec::new(),
            following: Vec::new(),
        }
    }

    pub fn timeline(&self) -> &[Post] {
        &self.timeline
    }

    pub fn following(&self) -> &[UserId] {
        &self.following
    }

    pub fn is_following(&self, other: UserId) -> bool {
        self.following.contains(&other)
    }

    /// Append a post to the end of the timeline
    pub fn append_post(&mut self, post: Post) {
        self.timeline.push(post);
    }

    /// Add a follow edge; returns `false` if it already existed
    pub fn follow(&mut self, other: UserId) -> bool {
        if self.is_following(other) {
            return false;
        }
        self.following.push(other);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_new_user_is_empty() {
        let user = User::new(UserId(0), "Alice");

        assert_eq!(user.name, "Alice");
        assert!(user.timeline().is_empty());
        assert!(user.following().is_empty());
    }

    #[test]
    fn test_follow_is_idempotent() {
        let mut user = User::new(UserId(0), "Alice");

        assert!(user.follow(UserId(1)));
        assert!(!user.follow(UserId(1)));
        assert!(user.follow(UserId(2)));

        assert_eq!(user.following(), &[UserId(1), UserId(2)]);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut user = User::new(UserId(0), "Bob");
        let now = Utc::now();
        user.append_post(Post::new(1, "yo", now));
        user.append_post(Post::new(2, "gg", now));

        let messages: Vec<_> = user.timeline().iter().map(|p| p.message()).collect();
        assert_eq!(messages, vec!["yo", "gg"]);
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(4).to_string(), "user:4");
    }
}
