use chirp_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ChirpError
pub type Result<T> = std::result::Result<T, ChirpError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidArgument,
    NotFound,
    MissingArgument,

    // Routing
    InvalidSignature,

    // Runtime
    Concurrency,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MissingArgument => "ERR_MISSING_ARGUMENT",
            ExErrorKind::InvalidSignature => "ERR_INVALID_SIGNATURE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, user, request) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    user: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            user: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add user context
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(user) = &self.user {
            write!(f, " (user: {})", user)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for chirp operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChirpError {
    /// A user name was empty or whitespace-only
    #[error("Invalid user name {name:?}: must not be empty or whitespace-only")]
    InvalidUserName { name: String },

    /// A user handle was not issued by this store
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    /// A command handler received fewer arguments than it needs
    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    MissingArgument {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// A command signature could not be compiled into a matcher
    #[error("Invalid signature for command '{command}': {reason}")]
    InvalidSignature { command: String, reason: String },

    /// A thread panicked while holding the user store lock
    #[error("User store lock poisoned")]
    StoreLockPoisoned,
}

/// Conversion from ChirpError to the structured ExError
impl From<ChirpError> for ExError {
    fn from(err: ChirpError) -> Self {
        match err {
            ChirpError::InvalidUserName { name } => ExError::new(ExErrorKind::InvalidArgument)
                .with_user(name)
                .with_message("User name must not be empty or whitespace-only"),

            ChirpError::UserNotFound { user_id } => ExError::new(ExErrorKind::NotFound)
                .with_user(user_id)
                .with_message("User not found"),

            ChirpError::MissingArgument {
                command,
                expected,
                actual,
            } => ExError::new(ExErrorKind::MissingArgument)
                .with_op(command)
                .with_message(format!("Expected {} argument(s), got {}", expected, actual)),

            ChirpError::InvalidSignature { command, reason } => {
                ExError::new(ExErrorKind::InvalidSignature)
                    .with_op(command)
                    .with_message(reason)
            }

            ChirpError::StoreLockPoisoned => ExError::new(ExErrorKind::Concurrency)
                .with_message("User store lock poisoned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidArgument, "ERR_INVALID_ARGUMENT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::MissingArgument, "ERR_MISSING_ARGUMENT"),
            (ExErrorKind::InvalidSignature, "ERR_INVALID_SIGNATURE"),
            (ExErrorKind::Concurrency, "ERR_CONCURRENCY"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::MissingArgument)
            .with_op("post")
            .with_message("Expected 2 argument(s), got 1");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_MISSING_ARGUMENT]"));
        assert!(rendered.contains("'post'"));
        assert!(rendered.contains("got 1"));
    }

    #[test]
    fn test_request_id_none_by_default() {
        let err = ExError::new(ExErrorKind::Concurrency);
        assert!(err.request_id().is_none());
        assert!(err.user().is_none());
    }

    #[test]
    fn test_request_id_is_rendered() {
        let request_id = RequestId::from_string("req-42".to_string());
        let err = ExError::from(ChirpError::StoreLockPoisoned).with_request_id(request_id);
        assert_eq!(err.request_id().map(RequestId::as_str), Some("req-42"));
        assert!(err.to_string().ends_with("(request_id: req-42)"));
    }
}
