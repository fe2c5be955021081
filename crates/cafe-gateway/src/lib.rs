//! Cafe Gateway - lists cafés of a city over HTTP
//!
//! `GET /cafe?city=<name>&count=<n>&search=<term>` answers with the city's
//! café names, optionally filtered by a case-insensitive substring and capped
//! to the first `count` entries, joined with commas.

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod router;

pub use catalog::CityCatalog;
pub use config::AppConfig;
pub use error::{CatalogError, QueryError};
pub use query::CafeQuery;

/// Shared application state
pub struct AppState {
    pub catalog: CityCatalog,
}

impl AppState {
    pub fn new(catalog: CityCatalog) -> Self {
        Self { catalog }
    }
}
