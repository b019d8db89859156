//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps [`Error`] onto status codes and
//! the uniform `{status, msg}` response body. Every core operation returns
//! `Result<T, Error>` so a failure is always exactly one typed outcome.

/// Stable machine-readable code describing the failure category.
///
/// Ordered by precedence: when several could apply, the earlier variant wins
/// (a malformed identifier is reported before any lookup is attempted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Structurally invalid input: bad identifier, disallowed sort/order
    /// value, unrecognised or missing body field. Never reaches the store.
    InvalidRequest,
    /// Well-formed insert referencing entities that do not exist.
    UnprocessableEntity,
    /// The requested or referenced resource does not exist.
    NotFound,
    /// Store-level or otherwise unclassified fault.
    InternalError,
}

/// Message used for every structurally invalid request.
pub const INVALID_INPUT_MSG: &str = "Invalid input data";

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty; constructors only accept literal or formatted
///   human-readable text.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Article does not exist");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message rendered in the `msg` field.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// The canonical 400 outcome for malformed identifiers, sort clauses,
    /// and request bodies.
    pub fn invalid_input() -> Self {
        Self::invalid_request(INVALID_INPUT_MSG)
    }

    /// Convenience constructor for [`ErrorCode::UnprocessableEntity`].
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnprocessableEntity, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
