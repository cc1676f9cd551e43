//! Structured logging for chirp
//!
//! `init(profile)` installs the process subscriber once. Services bracket each
//! operation with `log_op_start!` and `log_op_end!` / `log_op_error!`, and tests
//! read those events back through `test_capture`.
//!
//! ```rust
//! use chirp_core::logging_facility::{init, Profile};
//!
//! init(Profile::Console);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

use std::time::Instant;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

/// Milliseconds elapsed since `started`, saturating at `u64::MAX`
pub fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
