//! `log_op_*` macros
//!
//! A service operation logs one `start` event, then exactly one `end` or
//! `end_error` event under the same `op`. Extra `key = value` fields are passed
//! straight through to `tracing`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// `start` event at info level
///
/// ```
/// # use chirp_core::log_op_start;
/// log_op_start!("timeline_post");
/// log_op_start!("timeline_post", user = "alice");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            chirp_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// `end` event at info level; `duration_ms` is required
///
/// ```
/// # use chirp_core::log_op_end;
/// log_op_end!("timeline_post", duration_ms = 3, user = "alice");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            chirp_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// `end_error` event at error level
///
/// `$err` is anything convertible into `ExError`; its kind and stable code are
/// logged as `err.kind` and `err.code`.
///
/// ```
/// # use chirp_core::{log_op_error, errors::ChirpError};
/// let err = ChirpError::InvalidUserName { name: " ".to_string() };
/// log_op_error!("timeline_post", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            chirp_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
