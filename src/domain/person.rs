//! Person data model and candidate-record validation.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Stable person identifier, assigned by the record store on insertion.
///
/// Identifiers are opaque to callers: the only operations the API needs are
/// parsing a path segment and rendering the value back into a response. A
/// path segment that does not parse is a malformed id, which the error
/// classifier keeps distinct from "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Wrap a store-provided UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    ///
    /// Only fixture stores and tests assign ids themselves; the real store
    /// does it as a column default.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A persisted contact record.
///
/// ## Invariants
/// - `name` and `number` are non-empty once the record has been persisted;
///   the storage layer enforces this with `CHECK` constraints.
/// - `id` is stable for the lifetime of the record and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

/// Validation errors raised by [`PersonDraft::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    MissingName,
    MissingNumber,
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "name is missing or empty"),
            Self::MissingNumber => write!(f, "number is missing or empty"),
        }
    }
}

impl std::error::Error for PersonValidationError {}

/// A validated candidate record, ready to be persisted.
///
/// Construction is the validation step: a draft exists only if both fields
/// were present and non-empty. No trimming or case folding is applied; name
/// comparison stays exact-match throughout the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub number: String,
}

impl PersonDraft {
    /// Validate a `{name, number}` payload as received off the wire.
    ///
    /// Either field being absent or empty is a deterministic rejection;
    /// an entirely absent payload arrives here as two `None`s.
    pub fn from_parts(
        name: Option<String>,
        number: Option<String>,
    ) -> Result<Self, PersonValidationError> {
        let name = name
            .filter(|value| !value.is_empty())
            .ok_or(PersonValidationError::MissingName)?;
        let number = number
            .filter(|value| !value.is_empty())
            .ok_or(PersonValidationError::MissingNumber)?;

        Ok(Self { name, number })
    }
}

/// Replacement values for an update.
///
/// Updates deliberately skip draft validation: absent payload fields are
/// written as empty strings and the store's own constraints decide whether
/// the write is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonUpdate {
    pub name: String,
    pub number: String,
}
