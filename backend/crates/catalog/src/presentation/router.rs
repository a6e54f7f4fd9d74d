//! Catalog Router

use crate::domain::repository::CatalogRepository;
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the Catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic Catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/workouts", get(handlers::list_workouts::<R>))
        .route("/sessions", get(handlers::list_sessions::<R>))
        .route("/products", get(handlers::list_products::<R>))
        .route("/messages", get(handlers::list_messages::<R>))
        .with_state(state)
}
