use crate::errors::Result;
use crate::model::post::newest_first;
use crate::model::{AggregatedPost, User, UserId};
use crate::ops::{write_store, SharedStore, UserStore};

use super::observe;

/// Builds a user's wall: their own posts merged with everyone they follow
#[derive(Clone)]
pub struct AggregatorService {
    store: SharedStore,
}

impl AggregatorService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Aggregate the wall of `user_name`, newest first
    ///
    /// The requester's own posts are always included, whatever their follow
    /// state. Posts with equal timestamps are ordered by append sequence,
    /// later first, which makes the output a total order.
    ///
    /// # Errors
    ///
    /// * `InvalidUserName` - If the user name is empty or whitespace-only
    /// * `StoreLockPoisoned` - If the store lock was poisoned
    pub fn get_aggregated_posts(&self, user_name: &str) -> Result<Vec<AggregatedPost>> {
        observe("wall_aggregate", user_name, || {
            let mut store = write_store(&self.store)?;
            let requester = store.get_or_create(user_name)?;

            let sources = wall_sources(&store, requester)?;
            let users = sources
                .iter()
                .map(|id| store.user(*id))
                .collect::<Result<Vec<_>>>()?;
            let wall = merge_timelines(users);

            tracing::debug!(
                user = user_name,
                source_count = sources.len(),
                post_count = wall.len(),
                "wall aggregated"
            );
            Ok(wall)
        })
    }
}

/// The requester followed by each followee in first-follow order
///
/// A self-follow edge is skipped so the requester is listed once.
fn wall_sources(store: &UserStore, requester: UserId) -> Result<Vec<UserId>> {
    let user = store.user(requester)?;
    let mut sources = Vec::with_capacity(user.following().len() + 1);
    sources.push(requester);
    sources.extend(user.following().iter().copied().filter(|id| *id != requester));
    Ok(sources)
}

/// Flatten the timelines of `sources` into one feed, newest first
///
/// Each post is paired with the user whose timeline holds it.
pub fn merge_timelines<'a>(sources: impl IntoIterator<Item = &'a User>) -> Vec<AggregatedPost> {
    let mut merged: Vec<AggregatedPost> = sources
        .into_iter()
        .flat_map(|user| {
            user.timeline()
                .iter()
                .map(move |post| AggregatedPost::new(post.clone(), user.id, user.name.as_str()))
        })
        .collect();

    merged.sort_by(|a, b| newest_first(&a.post, &b.post));
    merged
}
