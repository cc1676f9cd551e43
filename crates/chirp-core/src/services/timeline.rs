use std::sync::Arc;

use crate::clock::Clock;
use crate::errors::Result;
use crate::model::post::newest_first;
use crate::model::Post;
use crate::ops::{write_store, SharedStore};

use super::observe;

/// Writes to and reads from individual user timelines
#[derive(Clone)]
pub struct TimelineService {
    store: SharedStore,
    clock: Arc<dyn Clock>,
}

impl TimelineService {
    pub fn new(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Append a message to the end of a user's timeline, stamped with the current time
    ///
    /// The message is not validated; only the user name is.
    ///
    /// # Errors
    ///
    /// * `InvalidUserName` - If the user name is empty or whitespace-only
    /// * `StoreLockPoisoned` - If the store lock was poisoned
    pub fn post(&self, user_name: &str, message: &str) -> Result<()> {
        observe("timeline_post", user_name, || {
            let mut store = write_store(&self.store)?;
            let user_id = store.get_or_create(user_name)?;
            let seq = store.next_post_seq();
            let post = Post::new(seq, message, self.clock.now());
            store.user_mut(user_id)?.append_post(post);

            tracing::debug!(user = user_name, seq, "post appended");
            Ok(())
        })
    }

    /// Read a user's timeline, newest first
    ///
    /// Equal timestamps are ordered by append sequence, later first.
    ///
    /// # Errors
    ///
    /// * `InvalidUserName` - If the user name is empty or whitespace-only
    /// * `StoreLockPoisoned` - If the store lock was poisoned
    pub fn get_timeline(&self, user_name: &str) -> Result<Vec<Post>> {
        observe("timeline_read", user_name, || {
            let mut store = write_store(&self.store)?;
            let user_id = store.get_or_create(user_name)?;

            let mut posts = store.user(user_id)?.timeline().to_vec();
            posts.sort_by(newest_first);

            tracing::debug!(user = user_name, post_count = posts.len(), "timeline read");
            Ok(posts)
        })
    }
}
