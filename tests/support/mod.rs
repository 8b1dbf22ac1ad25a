//! Test doubles shared by the integration suites.

use std::sync::Mutex;

use async_trait::async_trait;

use phonebook::domain::ports::{PersonRepository, PersonRepositoryError};
use phonebook::domain::{Person, PersonDraft, PersonId, PersonUpdate};

/// In-memory record store mirroring the constraints of the real schema:
/// ids are assigned on insert, names carry a unique index, and both columns
/// reject empty values.
#[derive(Debug, Default)]
pub struct InMemoryPersons {
    rows: Mutex<Vec<Person>>,
}

fn check_non_empty(name: &str, number: &str) -> Result<(), PersonRepositoryError> {
    if name.is_empty() {
        return Err(PersonRepositoryError::constraint(
            "new row for relation \"persons\" violates check constraint \"persons_name_check\"",
        ));
    }
    if number.is_empty() {
        return Err(PersonRepositoryError::constraint(
            "new row for relation \"persons\" violates check constraint \"persons_number_check\"",
        ));
    }
    Ok(())
}

#[async_trait]
impl PersonRepository for InMemoryPersons {
    async fn list(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(self.rows.lock().expect("store lock").clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let rows = self.rows.lock().expect("store lock");
        Ok(rows.iter().find(|person| person.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonRepositoryError> {
        let rows = self.rows.lock().expect("store lock");
        Ok(rows.iter().find(|person| person.name == name).cloned())
    }

    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError> {
        check_non_empty(&draft.name, &draft.number)?;

        let mut rows = self.rows.lock().expect("store lock");
        if rows.iter().any(|person| person.name == draft.name) {
            return Err(PersonRepositoryError::constraint(
                "duplicate key value violates unique constraint \"persons_name_key\"",
            ));
        }

        let person = Person {
            id: PersonId::random(),
            name: draft.name.clone(),
            number: draft.number.clone(),
        };
        rows.push(person.clone());
        Ok(person)
    }

    async fn update(
        &self,
        id: &PersonId,
        changes: &PersonUpdate,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        let mut rows = self.rows.lock().expect("store lock");
        let Some(position) = rows.iter().position(|person| person.id == *id) else {
            return Ok(None);
        };

        check_non_empty(&changes.name, &changes.number)?;
        if rows
            .iter()
            .any(|person| person.id != *id && person.name == changes.name)
        {
            return Err(PersonRepositoryError::constraint(
                "duplicate key value violates unique constraint \"persons_name_key\"",
            ));
        }

        let person = &mut rows[position];
        person.name = changes.name.clone();
        person.number = changes.number.clone();
        Ok(Some(person.clone()))
    }

    async fn delete(&self, id: &PersonId) -> Result<(), PersonRepositoryError> {
        let mut rows = self.rows.lock().expect("store lock");
        rows.retain(|person| person.id != *id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, PersonRepositoryError> {
        Ok(self.rows.lock().expect("store lock").len() as u64)
    }
}
