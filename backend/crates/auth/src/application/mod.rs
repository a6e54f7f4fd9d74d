//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod login;
pub mod register;
pub mod session;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use session::SessionCodec;
