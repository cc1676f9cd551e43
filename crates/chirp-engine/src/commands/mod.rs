//! Built-in commands.
//!
//! | command   | signature                 | output                 |
//! |-----------|---------------------------|------------------------|
//! | `post`    | `<name> -> <message>`     | none                   |
//! | `follows` | `<name> follows <name>`   | none                   |
//! | `wall`    | `<name> wall`             | aggregated feed lines  |
//! | `read`    | `<name>`                  | timeline lines         |
//!
//! `wall` must be registered before `read`; see [`builtin_handlers`].

// Case folding under the router's case-insensitive flag must stay ASCII:
// in Unicode mode `k` also matches U+212A and `s` matches U+017F.

/// Capture group for a user name token: ASCII letters, digits, hyphen, underscore.
macro_rules! user_name {
    () => {
        "((?-u:[A-Za-z0-9_-])+)"
    };
}
pub(crate) use user_name;

/// A literal command keyword, matched with ASCII case folding only.
macro_rules! keyword {
    ($word:literal) => {
        concat!("(?-u:", $word, ")")
    };
}
pub(crate) use keyword;

pub mod follows;
pub mod post;
pub mod read;
pub mod wall;

pub use follows::FollowsCommand;
pub use post::PostCommand;
pub use read::ReadCommand;
pub use wall::WallCommand;

use std::sync::Arc;

use chirp_core::clock::Clock;
use chirp_core::errors::{ChirpError, Result};
use chirp_core::ops::SharedStore;
use chirp_core::{
    AggregatedPostFormatter, AggregatorService, FollowService, PostFormatter, TimelineService,
};

use crate::router::CommandHandler;

/// The built-in commands in dispatch order: post, follows, wall, read.
pub fn builtin_handlers(store: &SharedStore, clock: Arc<dyn Clock>) -> Vec<Box<dyn CommandHandler>> {
    let timeline = TimelineService::new(store.clone(), clock.clone());
    let posts = PostFormatter::new(clock);

    vec![
        Box::new(PostCommand::new(timeline.clone())),
        Box::new(FollowsCommand::new(FollowService::new(store.clone()))),
        Box::new(WallCommand::new(
            AggregatorService::new(store.clone()),
            AggregatedPostFormatter::new(posts.clone()),
        )),
        Box::new(ReadCommand::new(timeline, posts)),
    ]
}

/// Borrow the first `N` arguments, or fail with `MissingArgument`.
pub(crate) fn expect_args<'a, const N: usize>(
    command: &str,
    args: &'a [String],
) -> Result<[&'a str; N]> {
    if args.len() < N {
        return Err(ChirpError::MissingArgument {
            command: command.to_string(),
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}
