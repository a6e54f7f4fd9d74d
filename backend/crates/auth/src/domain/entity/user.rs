//! User Entity
//!
//! A registered account. Created on registration, read on login and by the
//! session loader. Never mutated afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

#[derive(Debug, Clone)]
pub struct User {
    /// Opaque UUID, also carried in the session token
    pub user_id: UserId,
    /// Unique, normalized
    pub email: Email,
    pub password_hash: HashedPassword,
    pub first_name: String,
    pub last_name: String,
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new customer account
    pub fn new(
        email: Email,
        password_hash: HashedPassword,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            first_name: first_name.into(),
            last_name: last_name.into(),
            user_role: UserRole::default(),
            created_at: Utc::now(),
        }
    }

    /// First letter of each name, as shown in the avatar
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
