use chirp_core::errors::{ChirpError, ExError, ExErrorKind};

#[test]
fn test_invalid_user_name_maps_to_invalid_argument() {
    let err = ChirpError::InvalidUserName {
        name: "  ".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidArgument);
    assert_eq!(ex_err.code(), "ERR_INVALID_ARGUMENT");
    assert_eq!(ex_err.user(), Some("  "));
}

#[test]
fn test_missing_argument_carries_command_as_op() {
    let err = ChirpError::MissingArgument {
        command: "follows".to_string(),
        expected: 2,
        actual: 1,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingArgument);
    assert_eq!(ex_err.op(), Some("follows"));
    assert!(ex_err.message().contains("got 1"));
}

#[test]
fn test_user_not_found_distinct_from_invalid_argument() {
    let ex_err: ExError = ChirpError::UserNotFound {
        user_id: "user:9".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidArgument);
}

#[test]
fn test_lock_poisoning_is_a_concurrency_error() {
    let ex_err: ExError = ChirpError::StoreLockPoisoned.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Concurrency);
}

#[test]
fn test_chirp_error_display_names_the_problem() {
    let err = ChirpError::InvalidSignature {
        command: "wall".to_string(),
        reason: "unclosed group".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("wall"));
    assert!(rendered.contains("unclosed group"));
}
