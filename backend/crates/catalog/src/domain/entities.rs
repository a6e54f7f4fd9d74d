//! Domain Entities
//!
//! Read models for the listing pages. Rows are written by seeding or
//! admin tooling outside this service.

use auth::domain::value_object::user_role::UserRole;
use chrono::{DateTime, Utc};
use kernel::id::{MessageId, ProductId, UserId, WorkoutId, WorkoutSessionId};

use crate::domain::value_objects::{Difficulty, SessionStatus};

/// Badge text for a workout that is streaming right now
pub const LIVE_BADGE: &str = "LIVE";

/// A user as it appears next to content (trainer, message sender)
#[derive(Debug, Clone)]
pub struct Person {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct Workout {
    pub id: WorkoutId,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// Free text such as `HIIT` or `Yoga`
    pub workout_type: String,
    pub duration_minutes: i32,
    pub difficulty: Difficulty,
    pub is_live: bool,
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// `LIVE` while live, otherwise the workout type
    pub fn badge(&self) -> &str {
        if self.is_live {
            LIVE_BADGE
        } else {
            &self.workout_type
        }
    }
}

/// A scheduled group class
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    pub id: WorkoutSessionId,
    pub workout: Workout,
    pub trainer: Person,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: SessionStatus,
}

impl WorkoutSession {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time >= now
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub amazon_url: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Person,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn workout(is_live: bool) -> Workout {
        Workout {
            id: WorkoutId::new(),
            title: "Morning Burn".to_string(),
            description: String::new(),
            thumbnail: None,
            workout_type: "HIIT".to_string(),
            duration_minutes: 30,
            difficulty: Difficulty::Intermediate,
            is_live,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_badge() {
        assert_eq!(workout(true).badge(), "LIVE");
        assert_eq!(workout(false).badge(), "HIIT");
    }

    #[test]
    fn test_is_upcoming_includes_now() {
        let now = Utc::now();
        let session = WorkoutSession {
            id: WorkoutSessionId::new(),
            workout: workout(false),
            trainer: Person {
                user_id: UserId::new(),
                first_name: "Sam".to_string(),
                last_name: "Reyes".to_string(),
                role: UserRole::Trainer,
            },
            start_time: now,
            end_time: now + Duration::hours(1),
            status: SessionStatus::Scheduled,
        };

        assert!(session.is_upcoming(now));
        assert!(session.is_upcoming(now - Duration::seconds(1)));
        assert!(!session.is_upcoming(now + Duration::seconds(1)));
    }
}
