use std::sync::Arc;

use crate::clock::Clock;
use crate::model::{AggregatedPost, Post};

use super::relative_time::relative_time;

/// Renders one domain entity as a line of display text
pub trait EntityFormatter<T>: Send + Sync {
    fn format(&self, item: &T) -> String;
}

/// Renders a post as `<message> (<relative time>)`
#[derive(Clone)]
pub struct PostFormatter {
    clock: Arc<dyn Clock>,
}

impl PostFormatter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl EntityFormatter<Post> for PostFormatter {
    fn format(&self, post: &Post) -> String {
        format!(
            "{} ({})",
            post.message(),
            relative_time(post.posted_at(), self.clock.now())
        )
    }
}

/// Renders an aggregated post as `<owner> - <post line>`
#[derive(Clone)]
pub struct AggregatedPostFormatter {
    posts: PostFormatter,
}

impl AggregatedPostFormatter {
    pub fn new(posts: PostFormatter) -> Self {
        Self { posts }
    }
}

impl EntityFormatter<AggregatedPost> for AggregatedPostFormatter {
    fn format(&self, item: &AggregatedPost) -> String {
        format!("{} - {}", item.owner_name, self.posts.format(&item.post))
    }
}

/// Join rendered lines with `\n`; no lines gives the empty string
pub fn join_lines<T>(items: &[T], formatter: &dyn EntityFormatter<T>) -> String {
    items
        .iter()
        .map(|item| formatter.format(item))
        .collect::<Vec<_>>()
        .join("\n")
}
