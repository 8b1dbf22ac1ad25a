//! Domain error taxonomy and the failure classifier.
//!
//! Every failure a handler can surface is funnelled through [`Error`]:
//! validation rejections, malformed identifiers, storage constraint
//! violations, unmatched routes, and everything else. The HTTP adapter maps
//! each [`ErrorKind`] to a status code and response payload in one place, so
//! individual handlers never build error responses ad hoc.

use std::fmt;

use crate::domain::PersonValidationError;
use crate::domain::ports::PersonRepositoryError;

/// Fixed user-facing message for rejected create payloads.
const MISSING_FIELD_MESSAGE: &str = "Phonebook data insertion failed, data seems to be missing. \
     If you have forgotten your name, please seek medical help";

/// Failure category, driving the HTTP status and payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A create payload was absent or missing `name`/`number`.
    MissingField,
    /// A path identifier does not match the store's identifier shape.
    MalformedId,
    /// The store rejected a write against one of its own constraints.
    RecordInvalid,
    /// A create collided with an existing record's name.
    Conflict,
    /// The request matched no known operation and path.
    UnknownEndpoint,
    /// Anything else, including store connectivity failures. Logged before
    /// being surfaced as a generic failure; details never reach the caller.
    Unhandled,
}

/// Classified failure carried back through handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message for the response payload.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Rejected create payload. Always carries the fixed explanatory message.
    pub fn missing_field() -> Self {
        Self::new(ErrorKind::MissingField, MISSING_FIELD_MESSAGE)
    }

    /// Identifier did not parse as a store id.
    pub fn malformed_id() -> Self {
        Self::new(ErrorKind::MalformedId, "malformatted id")
    }

    /// Store-level validation failure; the underlying message is echoed.
    pub fn record_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RecordInvalid, message)
    }

    /// Duplicate name on create.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Route matched no registered operation.
    pub fn unknown_endpoint() -> Self {
        Self::new(ErrorKind::UnknownEndpoint, "unknown endpoint")
    }

    /// Unclassified failure. The message is logged, never exposed.
    pub fn unhandled(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unhandled, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}

impl From<PersonValidationError> for Error {
    fn from(_: PersonValidationError) -> Self {
        // The wire contract promises one fixed message regardless of which
        // field was missing.
        Self::missing_field()
    }
}

impl From<PersonRepositoryError> for Error {
    fn from(err: PersonRepositoryError) -> Self {
        match err {
            PersonRepositoryError::Constraint { message } => Self::record_invalid(message),
            other @ (PersonRepositoryError::Connection { .. }
            | PersonRepositoryError::Query { .. }) => Self::unhandled(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests;
