//! Row models bridging the `persons` table and the domain types.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::persons;
use crate::domain::{Person, PersonId};

/// A `persons` row as read from the database.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PersonRow {
    pub id: Uuid,
    pub name: String,
    pub number: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::from_uuid(row.id),
            name: row.name,
            number: row.number,
        }
    }
}

/// Insertable row; the database assigns the id.
#[derive(Debug, Insertable)]
#[diesel(table_name = persons)]
pub struct NewPersonRow<'a> {
    pub name: &'a str,
    pub number: &'a str,
}

/// Changeset replacing both mutable columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = persons)]
pub struct PersonRowChanges<'a> {
    pub name: &'a str,
    pub number: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn row_converts_to_domain_person() {
        let id = Uuid::new_v4();
        let row = PersonRow {
            id,
            name: "Ada".to_owned(),
            number: "123".to_owned(),
        };

        let person = Person::from(row);

        assert_eq!(person.id.as_uuid(), &id);
        assert_eq!(person.name, "Ada");
        assert_eq!(person.number, "123");
    }
}
