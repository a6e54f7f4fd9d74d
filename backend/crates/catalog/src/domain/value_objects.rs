//! Value Objects
//!
//! Enumerations stored as upper-case text codes.

use derive_more::Display;
use serde::Serialize;

/// Workout difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[display("BEGINNER")]
    Beginner,
    #[display("INTERMEDIATE")]
    Intermediate,
    #[display("ADVANCED")]
    Advanced,
}

impl Difficulty {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BEGINNER" => Some(Self::Beginner),
            "INTERMEDIATE" => Some(Self::Intermediate),
            "ADVANCED" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Group session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    #[display("SCHEDULED")]
    Scheduled,
    #[display("IN_PROGRESS")]
    InProgress,
    #[display("COMPLETED")]
    Completed,
    #[display("CANCELLED")]
    Cancelled,
}

impl SessionStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SCHEDULED" => Some(Self::Scheduled),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_codes() {
        for d in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert_eq!(Difficulty::from_code(&d.to_string()), Some(d));
        }
        assert_eq!(Difficulty::from_code("EXPERT"), None);
    }

    #[test]
    fn test_session_status_codes() {
        assert_eq!(SessionStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(
            serde_json::to_string(&SessionStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            SessionStatus::from_code("CANCELLED"),
            Some(SessionStatus::Cancelled)
        );
        assert_eq!(SessionStatus::from_code("scheduled"), None);
    }
}
