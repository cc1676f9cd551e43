//! Feed services
//!
//! Each service holds a handle to the shared user store and resolves users by
//! name with get-or-create semantics, so naming an unknown user anywhere
//! materializes it with an empty timeline.

pub mod aggregator;
pub mod follow;
pub mod timeline;

pub use aggregator::{merge_timelines, AggregatorService};
pub use follow::FollowService;
pub use timeline::TimelineService;

use std::time::Instant;

use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::{log_op_end, log_op_error, log_op_start};

/// Run one service operation between start and end/end_error events
pub(crate) fn observe<T>(op: &'static str, user: &str, run: impl FnOnce() -> Result<T>) -> Result<T> {
    let started = Instant::now();
    log_op_start!(op, user = user);

    let result = run();
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed_ms(started), user = user);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = elapsed_ms(started), user = user);
        }
    }
    result
}
