use crate::errors::Result;
use crate::ops::{write_store, SharedStore};

use super::observe;

/// Records directed follow edges between users
#[derive(Clone)]
pub struct FollowService {
    store: SharedStore,
}

impl FollowService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Make `follower_name` follow `followed_name`
    ///
    /// Both users are created if absent. Adding an existing edge is a no-op,
    /// and a user may follow themselves.
    ///
    /// # Errors
    ///
    /// * `InvalidUserName` - If either name is empty or whitespace-only
    /// * `StoreLockPoisoned` - If the store lock was poisoned
    pub fn set_following(&self, follower_name: &str, followed_name: &str) -> Result<()> {
        observe("follow_set", follower_name, || {
            let mut store = write_store(&self.store)?;
            let follower = store.get_or_create(follower_name)?;
            let followed = store.get_or_create(followed_name)?;

            let added = store.user_mut(follower)?.follow(followed);
            tracing::debug!(
                user = follower_name,
                followed = followed_name,
                added,
                "follow edge recorded"
            );
            Ok(())
        })
    }

    /// Display names of the users `user_name` follows, in first-follow order
    ///
    /// # Errors
    ///
    /// * `InvalidUserName` - If the name is empty or whitespace-only
    /// * `StoreLockPoisoned` - If the store lock was poisoned
    pub fn following(&self, user_name: &str) -> Result<Vec<String>> {
        observe("follow_list", user_name, || {
            let mut store = write_store(&self.store)?;
            let user_id = store.get_or_create(user_name)?;

            let user = store.user(user_id)?;
            user.following()
                .iter()
                .map(|id| store.user(*id).map(|u| u.name.clone()))
                .collect()
        })
    }
}
