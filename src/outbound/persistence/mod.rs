//! PostgreSQL persistence adapter for the record-store port.

mod diesel_person_repository;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
