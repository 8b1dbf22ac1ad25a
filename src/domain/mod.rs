//! Domain entities, validation, error taxonomy, and ports.
//!
//! Everything here is transport agnostic: the HTTP adapter turns [`Error`]
//! values into responses, and the persistence adapter implements
//! [`ports::PersonRepository`]. Types are documented with their invariants;
//! handlers rely on those rather than re-checking.

pub mod error;
pub mod person;
pub mod ports;

pub use self::error::{Error, ErrorKind};
pub use self::person::{Person, PersonDraft, PersonId, PersonUpdate, PersonValidationError};

/// Convenient result alias for request handlers.
pub type ApiResult<T> = Result<T, Error>;
