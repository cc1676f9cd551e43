pub mod aggregated_post;
pub mod post;
pub mod user;

pub use aggregated_post::AggregatedPost;
pub use post::Post;
pub use user::{User, UserId};
