//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState::new(Arc::new(repo), Arc::new(config));

    Router::new()
        .route(
            "/login",
            get(handlers::login_loader::<R>).post(handlers::login_action::<R>),
        )
        .route(
            "/register",
            get(handlers::register_loader::<R>).post(handlers::register_action::<R>),
        )
        .route("/logout", post(handlers::logout::<R>))
        .route("/session", get(handlers::session_status::<R>))
        .with_state(state)
}
