//! Page DTOs (Data Transfer Objects)
//!
//! Form bodies arrive urlencoded with every field optional, so a missing
//! field is reported by the action instead of rejected by the extractor.

use kernel::form::FieldErrors;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub redirect_to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub redirect_to: Option<String>,
}

/// `?redirectTo=` on the login and register pages
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub redirect_to: Option<String>,
}

// ============================================================================
// Action Data
// ============================================================================

/// Submitted values echoed back to refill the form. Passwords are never echoed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fields {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// 400 body of a failed login or register action
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_error: Option<String>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub field_errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Fields>,
}

impl ActionData {
    pub fn form_error(message: impl Into<String>) -> Self {
        Self {
            form_error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn invalid(field_errors: FieldErrors, fields: Fields) -> Self {
        Self {
            field_errors,
            fields: Some(fields),
            ..Default::default()
        }
    }

    pub fn rejected(message: impl Into<String>, fields: Fields) -> Self {
        Self {
            form_error: Some(message.into()),
            fields: Some(fields),
            ..Default::default()
        }
    }
}

// ============================================================================
// Loader Data
// ============================================================================

/// Login page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPageResponse {
    pub redirect_to: Option<String>,
    /// Link to the register page keeping the current query string
    pub register_href: String,
}

/// Register page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPageResponse {
    pub redirect_to: Option<String>,
    /// Link to the login page keeping the current query string
    pub login_href: String,
}

/// Signed-in user as shown in the page chrome
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            initials: user.initials(),
        }
    }
}

/// Root loader data
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: Option<CurrentUser>,
}
