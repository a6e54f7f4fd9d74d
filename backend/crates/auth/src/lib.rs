//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the session codec
//! - `infra/` - Database implementations
//! - `presentation/` - Page loaders/actions, DTOs, router
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless signed session cookie (no server-side session table)
//! - Redirect-preserving login via `redirectTo`
//! - Root loader reporting the signed-in user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session token = user ID + expiry, HMAC-SHA256 signed
//! - Unknown email and wrong password are indistinguishable to callers
//! - `redirectTo` only followed for local paths

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session::SessionCodec;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
