//! Chirp Core - in-memory social feed kernel
//!
//! This crate provides the domain model and services behind the chirp console:
//! - Users, posts and aggregated posts
//! - A get-or-create user store with stable handles
//! - Timeline (post/read), follow and wall aggregation services
//! - Display formatters with relative-time phrasing
//! - The structured error and logging facilities shared by every crate

pub mod clock;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;
pub mod services;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{ChirpError, ExError, ExErrorKind, Result};
pub use model::{AggregatedPost, Post, User, UserId};
pub use ops::{SharedStore, UserStore};
pub use render::{AggregatedPostFormatter, EntityFormatter, PostFormatter};
pub use services::{AggregatorService, FollowService, TimelineService};
