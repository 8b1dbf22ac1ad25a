//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.
//!
//! Constraint violations keep their database message so the error classifier
//! can echo them; everything else degrades to generic connection/query
//! failures with details confined to debug logs.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonDraft, PersonId, PersonUpdate};

use super::models::{NewPersonRow, PersonRow, PersonRowChanges};
use super::pool::{DbPool, PoolError};
use super::schema::persons;

/// Diesel-backed implementation of the `PersonRepository` port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PersonRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> PersonRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation,
            info,
        ) => PersonRepositoryError::constraint(info.message()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => PersonRepositoryError::query("database error"),
        DieselError::NotFound => PersonRepositoryError::query("record not found"),
        _ => PersonRepositoryError::query("database error"),
    }
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = persons::table
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = persons::table
            .filter(persons::id.eq(id.as_uuid()))
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = persons::table
            .filter(persons::name.eq(name))
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPersonRow {
            name: draft.name.as_str(),
            number: draft.number.as_str(),
        };

        let row: PersonRow = diesel::insert_into(persons::table)
            .values(&new_row)
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Person::from(row))
    }

    async fn update(
        &self,
        id: &PersonId,
        changes: &PersonUpdate,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = PersonRowChanges {
            name: changes.name.as_str(),
            number: changes.number.as_str(),
        };

        // Single UPDATE ... RETURNING keeps find-and-update atomic.
        let row: Option<PersonRow> = diesel::update(persons::table)
            .filter(persons::id.eq(id.as_uuid()))
            .set(&changeset)
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn delete(&self, id: &PersonId) -> Result<(), PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(persons::table)
            .filter(persons::id.eq(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn count(&self) -> Result<u64, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = persons::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the error mapping.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            PersonRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_a_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, PersonRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn unique_violations_preserve_the_database_message() {
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint \"persons_name_key\"".to_owned()),
        );

        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(
            repo_err,
            PersonRepositoryError::Constraint { .. }
        ));
        assert!(repo_err.to_string().contains("persons_name_key"));
    }

    #[rstest]
    fn check_violations_preserve_the_database_message() {
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::CheckViolation,
            Box::new("new row violates check constraint \"persons_name_check\"".to_owned()),
        );

        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(
            repo_err,
            PersonRepositoryError::Constraint { .. }
        ));
        assert!(repo_err.to_string().contains("persons_name_check"));
    }

    #[rstest]
    fn rollback_errors_degrade_to_generic_query_errors() {
        let repo_err = map_diesel_error(diesel::result::Error::RollbackTransaction);

        assert!(matches!(repo_err, PersonRepositoryError::Query { .. }));
    }
}
