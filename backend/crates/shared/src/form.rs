//! Form Field Errors
//!
//! Per-request map from form field name to a human-readable message.
//! Built by page actions, serialized into the 400 response, never stored.

use serde::Serialize;
use std::collections::BTreeMap;

/// Field name -> message
///
/// Serializes as a plain JSON object, e.g. `{"email":"Invalid email address"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the validator outcome for `field`; `None` means it passed.
    pub fn check(&mut self, field: &'static str, outcome: Option<String>) -> &mut Self {
        if let Some(message) = outcome {
            self.0.insert(field, message);
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_only_records_failures() {
        let mut errors = FieldErrors::new();
        errors
            .check("email", None)
            .check("password", Some("too short".to_string()));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("password"), Some("too short"));
        assert_eq!(errors.get("email"), None);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut errors = FieldErrors::new();
        errors.check("lastName", Some("Name must be at least 2 characters".into()));

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"lastName":"Name must be at least 2 characters"}"#);
    }
}
