//! Repository Traits

use chrono::{DateTime, Utc};

use crate::domain::entities::{Message, Product, Workout, WorkoutSession};
use crate::error::CatalogResult;

/// Read-only access to listing data
///
/// Implementations return rows already in page order.
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// All workouts, newest first
    async fn list_workouts(&self) -> CatalogResult<Vec<Workout>>;

    /// Sessions starting at or after `now`, soonest first
    async fn list_upcoming_sessions(&self, now: DateTime<Utc>) -> CatalogResult<Vec<WorkoutSession>>;

    /// Active products, newest first
    async fn list_active_products(&self) -> CatalogResult<Vec<Product>>;

    /// All messages, oldest first
    async fn list_messages(&self) -> CatalogResult<Vec<Message>>;
}
