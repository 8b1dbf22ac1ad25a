//! Diesel schema for the phonebook database.
//!
//! Expected DDL:
//!
//! ```sql
//! CREATE TABLE persons (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     name TEXT NOT NULL UNIQUE CHECK (name <> ''),
//!     number TEXT NOT NULL CHECK (number <> '')
//! );
//! ```
//!
//! The column default assigns identifiers; the unique index and `CHECK`
//! constraints are the storage half of the record invariants.

diesel::table! {
    persons (id) {
        id -> Uuid,
        name -> Text,
        number -> Text,
    }
}
