//! Web Server
//!
//! Composes the auth and catalog routers behind one axum app, adds the
//! landing page and the 404 fallback, and wraps everything in the HTTP
//! middleware stack.

pub mod config;
pub mod landing;

use auth::{AuthConfig, PgUserRepository, auth_router};
use axum::{
    Router,
    http::{HeaderValue, Method, Uri, header},
    routing::get,
};
use catalog::{PgCatalogRepository, catalog_router};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Merge the page routers with the landing page and the 404 fallback
pub fn app_router(auth: Router, catalog: Router) -> Router {
    Router::new()
        .route("/", get(landing::landing_page))
        .merge(auth)
        .merge(catalog)
        .fallback(not_found)
}

/// Full application backed by PostgreSQL
pub fn pg_app_router(pool: PgPool, auth_config: AuthConfig) -> Router {
    app_router(
        auth_router(PgUserRepository::new(pool.clone()), auth_config),
        catalog_router(PgCatalogRepository::new(pool)),
    )
}

/// Tracing and CORS around the whole app
pub fn with_middleware(app: Router, frontend_origins: &[String]) -> Router {
    app.layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origins))
}

pub fn cors_layer(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::not_found(format!("No page at {}", uri.path())).with_action("Return to Home")
}
