//! Page DTOs

use auth::domain::value_object::user_role::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ProductListing;
use crate::domain::entities::{Message, Person, Product, Workout, WorkoutSession};
use crate::domain::value_objects::{Difficulty, SessionStatus};

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Minutes
    pub duration: i32,
    pub difficulty: Difficulty,
    pub is_live: bool,
    pub badge: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Workout> for WorkoutDto {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id.to_string(),
            title: w.title.clone(),
            description: w.description.clone(),
            thumbnail: w.thumbnail.clone(),
            workout_type: w.workout_type.clone(),
            duration: w.duration_minutes,
            difficulty: w.difficulty,
            is_live: w.is_live,
            badge: w.badge().to_string(),
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutDto>,
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl From<&Person> for PersonDto {
    fn from(p: &Person) -> Self {
        Self {
            id: p.user_id.to_string(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            role: p.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: String,
    pub workout: WorkoutDto,
    pub trainer: PersonDto,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: SessionStatus,
}

impl From<&WorkoutSession> for SessionDto {
    fn from(s: &WorkoutSession) -> Self {
        Self {
            id: s.id.to_string(),
            workout: WorkoutDto::from(&s.workout),
            trainer: PersonDto::from(&s.trainer),
            start_time: s.start_time,
            end_time: s.end_time,
            status: s.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionDto>,
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub amazon_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.clone(),
            description: p.description.clone(),
            image_url: p.image_url.clone(),
            amazon_url: p.amazon_url.clone(),
            category: p.category.clone(),
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
    pub categories: Vec<String>,
    pub selected_category: String,
}

impl From<ProductListing> for ProductsResponse {
    fn from(listing: ProductListing) -> Self {
        Self {
            products: listing.products.iter().map(ProductDto::from).collect(),
            categories: listing.categories,
            selected_category: listing.selected_category,
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub content: String,
    pub from: PersonDto,
    /// Customer messages are shown on the right
    pub from_customer: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for MessageDto {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id.to_string(),
            content: m.content.clone(),
            from: PersonDto::from(&m.sender),
            from_customer: m.sender.role.is_customer(),
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageDto>,
}
