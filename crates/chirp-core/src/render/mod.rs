//! Display rendering for posts and walls
//!
//! - `relative_time` phrases an elapsed time ("5 minutes ago", "yesterday")
//! - `PostFormatter` renders `<message> (<relative time>)`
//! - `AggregatedPostFormatter` renders `<owner> - <message> (<relative time>)`

pub mod post_render;
pub mod relative_time;

pub use post_render::{join_lines, AggregatedPostFormatter, EntityFormatter, PostFormatter};
pub use relative_time::relative_time;
