//! Current User Use Case
//!
//! Resolves the signed-in user of a request from its session cookie.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::session::SessionCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: SessionCodec,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: SessionCodec) -> Self {
        Self { user_repo, codec }
    }

    /// `Ok(None)` for a missing, invalid or expired cookie, and for a valid
    /// cookie whose user no longer exists.
    pub async fn execute(&self, headers: &HeaderMap) -> AuthResult<Option<User>> {
        let Some(user_id) = self.codec.read_request(headers) else {
            return Ok(None);
        };

        let user = self.user_repo.find_by_id(&user_id).await?;
        if user.is_none() {
            tracing::debug!(user_id = %user_id, "Session refers to missing user");
        }

        Ok(user)
    }

    /// Like `execute`, but store failures are logged and read as anonymous
    pub async fn resolve(&self, headers: &HeaderMap) -> Option<User> {
        match self.execute(headers).await {
            Ok(user) => user,
            Err(e) => {
                e.log();
                None
            }
        }
    }
}
