//! Catalog Backend Module
//!
//! Read-only listing pages: workouts, upcoming group sessions, products
//! and messages.
//!
//! Clean Architecture structure:
//! - `domain/` - Read models, value objects, repository trait
//! - `application/` - One use case per listing
//! - `infra/` - Database implementations
//! - `presentation/` - Loaders, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
