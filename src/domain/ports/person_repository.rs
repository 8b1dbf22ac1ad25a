//! Port abstraction for the person record store.
//!
//! The store owns durability, id assignment, and constraint enforcement
//! (non-empty fields, unique names). Handlers hold no record state between
//! requests; everything goes through this trait.

use async_trait::async_trait;

use crate::domain::{Person, PersonDraft, PersonId, PersonUpdate};

/// Persistence errors raised by record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonRepositoryError {
    /// The store could not be reached.
    #[error("person store connection failed: {message}")]
    Connection { message: String },

    /// A query or mutation failed during execution.
    #[error("person store query failed: {message}")]
    Query { message: String },

    /// A write violated one of the store's own constraints. The message is
    /// preserved so the caller can echo it.
    #[error("{message}")]
    Constraint { message: String },
}

impl PersonRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a constraint-violation error with the given message.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }
}

/// Port for person record storage and retrieval.
///
/// Mutations on a single record rely on the store's own atomicity; the core
/// adds no locking of its own. The duplicate-name window between
/// `find_by_name` and `insert` is closed by the store's unique index, which
/// surfaces as [`PersonRepositoryError::Constraint`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Fetch every person, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Person>, PersonRepositoryError>;

    /// Fetch a single person by identifier.
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, PersonRepositoryError>;

    /// Fetch a single person by exact name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonRepositoryError>;

    /// Persist a validated draft. The store assigns the identifier.
    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError>;

    /// Atomically replace `name` and `number` for an existing record,
    /// returning the post-update record, or `None` when no record matched.
    async fn update(
        &self,
        id: &PersonId,
        changes: &PersonUpdate,
    ) -> Result<Option<Person>, PersonRepositoryError>;

    /// Remove a record if present. Removing an absent record is not an error.
    async fn delete(&self, id: &PersonId) -> Result<(), PersonRepositoryError>;

    /// Count all persons.
    async fn count(&self) -> Result<u64, PersonRepositoryError>;
}

/// Fixture implementation for running without a real database.
///
/// Lookups find nothing, writes are discarded (inserts still hand back a
/// record with a fresh id so the create flow stays observable). Used as the
/// server fallback when no `DATABASE_URL` is configured and in unit tests
/// where store behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePersonRepository;

#[async_trait]
impl PersonRepository for FixturePersonRepository {
    async fn list(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(None)
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError> {
        Ok(Person {
            id: PersonId::random(),
            name: draft.name.clone(),
            number: draft.number.clone(),
        })
    }

    async fn update(
        &self,
        _id: &PersonId,
        _changes: &PersonUpdate,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: &PersonId) -> Result<(), PersonRepositoryError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, PersonRepositoryError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_lookups_find_nothing() {
        let repo = FixturePersonRepository;
        assert!(repo.list().await.expect("list").is_empty());
        assert!(
            repo.find_by_id(&PersonId::random())
                .await
                .expect("find_by_id")
                .is_none()
        );
        assert!(
            repo.find_by_name("Ada")
                .await
                .expect("find_by_name")
                .is_none()
        );
        assert_eq!(repo.count().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn fixture_insert_echoes_the_draft_with_a_fresh_id() {
        let repo = FixturePersonRepository;
        let draft = PersonDraft {
            name: "Ada".to_owned(),
            number: "123".to_owned(),
        };

        let person = repo.insert(&draft).await.expect("insert");
        assert_eq!(person.name, "Ada");
        assert_eq!(person.number, "123");
    }

    #[tokio::test]
    async fn fixture_delete_is_accepted_for_any_id() {
        let repo = FixturePersonRepository;
        repo.delete(&PersonId::random()).await.expect("delete");
    }
}
