//! Field Validators
//!
//! Plain predicates used by page actions before anything reaches a use
//! case. Each returns `Some(message)` on failure and `None` when the value
//! is acceptable. Lengths count Unicode scalar values, not bytes.

pub const EMAIL_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const NAME_MIN_LENGTH: usize = 2;

pub fn validate_email(email: &str) -> Option<String> {
    if email.chars().count() < EMAIL_MIN_LENGTH || !email.contains('@') {
        return Some("Invalid email address".to_string());
    }
    None
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LENGTH
        ));
    }
    None
}

pub fn validate_name(name: &str) -> Option<String> {
    if name.chars().count() < NAME_MIN_LENGTH {
        return Some(format!(
            "Name must be at least {} characters",
            NAME_MIN_LENGTH
        ));
    }
    None
}
