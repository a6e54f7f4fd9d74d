use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    #[display("CUSTOMER")]
    Customer,
    #[display("TRAINER")]
    Trainer,
    #[display("ADMIN")]
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Customer => "CUSTOMER",
            Trainer => "TRAINER",
            Admin => "ADMIN",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "CUSTOMER" => Some(Customer),
            "TRAINER" => Some(Trainer),
            "ADMIN" => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_customer(&self) -> bool {
        matches!(self, UserRole::Customer)
    }
}
