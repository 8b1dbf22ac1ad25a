//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! the record-store port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::PersonRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub persons: Arc<dyn PersonRepository>,
}

impl HttpState {
    /// Construct state around a record-store implementation.
    pub fn new(persons: Arc<dyn PersonRepository>) -> Self {
        Self { persons }
    }
}
