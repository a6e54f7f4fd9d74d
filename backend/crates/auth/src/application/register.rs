//! Register Use Case
//!
//! Creates a new customer account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// `Ok(None)` when the email is already registered.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<Option<User>> {
        let password = ClearTextPassword::new(input.password);

        let Ok(email) = Email::new(input.email) else {
            return Ok(None);
        };

        let password_hash = password.hash(self.config.pepper())?;
        let user = User::new(
            email,
            password_hash,
            input.first_name.trim(),
            input.last_name.trim(),
        );

        // No pre-check: the unique index decides, so concurrent sign-ups
        // with one email produce exactly one account.
        match self.user_repo.create(&user).await {
            Ok(()) => {}
            Err(AuthError::EmailTaken) => {
                tracing::debug!("Registration with existing email");
                return Ok(None);
            }
            Err(e) => return Err(e),
        }

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(Some(user))
    }
}
