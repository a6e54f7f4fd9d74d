//! Login Use Case
//!
//! Checks an email/password pair against the credential store.

use std::sync::{Arc, LazyLock};
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Verified in place of a real hash when no account matches, so unknown
/// emails cost the same Argon2 work as wrong passwords.
static DUMMY_HASH: LazyLock<Option<HashedPassword>> = LazyLock::new(|| {
    ClearTextPassword::new("not-a-real-account-password".to_string())
        .hash(None)
        .ok()
});

#[cfg(test)]
static DUMMY_VERIFIES: AtomicUsize = AtomicUsize::new(0);

fn verify_dummy(password: &ClearTextPassword, pepper: Option<&[u8]>) {
    #[cfg(test)]
    DUMMY_VERIFIES.fetch_add(1, Ordering::SeqCst);

    if let Some(hash) = DUMMY_HASH.as_ref() {
        let _ = hash.verify(password, pepper);
    }
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// `Ok(None)` when the email is unknown or the password is wrong.
    /// Callers cannot tell the two apart.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<Option<User>> {
        let password = ClearTextPassword::new(input.password);

        let Ok(email) = Email::new(input.email) else {
            verify_dummy(&password, self.config.pepper());
            return Ok(None);
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            verify_dummy(&password, self.config.pepper());
            tracing::warn!("Login attempt for unknown email");
            return Ok(None);
        };

        if !user.password_hash.verify(&password, self.config.pepper()) {
            tracing::warn!(user_id = %user.user_id, "Invalid login attempt");
            return Ok(None);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::MemoryUserRepository;

    fn setup() -> (Arc<MemoryUserRepository>, Arc<AuthConfig>) {
        (
            Arc::new(MemoryUserRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    async fn register(repo: &Arc<MemoryUserRepository>, config: &Arc<AuthConfig>) -> User {
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                email: "morgan@example.com".to_string(),
                password: "hunter22".to_string(),
                first_name: "Morgan".to_string(),
                last_name: "Lee".to_string(),
            })
            .await
            .unwrap()
            .unwrap()
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_none() {
        let (repo, config) = setup();
        let use_case = LoginUseCase::new(repo, config);

        let result = use_case
            .execute(login_input("nobody@example.com", "whatever1"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unknown_email_still_verifies_a_hash() {
        let (repo, config) = setup();
        let before = DUMMY_VERIFIES.load(Ordering::SeqCst);

        let result = LoginUseCase::new(repo, config)
            .execute(login_input("ghost@example.com", "hunter22"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(DUMMY_VERIFIES.load(Ordering::SeqCst) > before);
    }

    #[test]
    fn test_dummy_hash_rejects_everything() {
        let hash = DUMMY_HASH.as_ref().unwrap();
        for candidate in ["", "hunter22", "not-a-real-account-password "] {
            assert!(!hash.verify(&ClearTextPassword::new(candidate.to_string()), None));
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (repo, config) = setup();
        let registered = register(&repo, &config).await;

        let user = LoginUseCase::new(repo, config)
            .execute(login_input("morgan@example.com", "hunter22"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_id, registered.user_id);
    }

    #[tokio::test]
    async fn test_login_normalizes_email() {
        let (repo, config) = setup();
        register(&repo, &config).await;

        let user = LoginUseCase::new(repo, config)
            .execute(login_input("  Morgan@Example.com ", "hunter22"))
            .await
            .unwrap();
        assert!(user.is_some());
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_none() {
        let (repo, config) = setup();
        register(&repo, &config).await;

        let result = LoginUseCase::new(repo, config)
            .execute(login_input("morgan@example.com", "hunter23"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_login_pepper_mismatch_is_none() {
        let (repo, config) = setup();
        register(&repo, &config).await;

        let peppered = Arc::new(AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..(*config).clone()
        });
        let result = LoginUseCase::new(repo, peppered)
            .execute(login_input("morgan@example.com", "hunter22"))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
