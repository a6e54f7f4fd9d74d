//! In-memory catalog for tests
//!
//! Holds rows in insertion order and applies the same filtering and
//! ordering the SQL queries do.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Message, Product, Workout, WorkoutSession};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogRepository {
    workouts: Vec<Workout>,
    sessions: Vec<WorkoutSession>,
    products: Vec<Product>,
    messages: Vec<Message>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workout(mut self, workout: Workout) -> Self {
        self.workouts.push(workout);
        self
    }

    pub fn with_session(mut self, session: WorkoutSession) -> Self {
        self.sessions.push(session);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    async fn list_workouts(&self) -> CatalogResult<Vec<Workout>> {
        let mut workouts = self.workouts.clone();
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workouts)
    }

    async fn list_upcoming_sessions(&self, now: DateTime<Utc>) -> CatalogResult<Vec<WorkoutSession>> {
        let mut sessions: Vec<_> = self
            .sessions
            .iter()
            .filter(|s| s.is_upcoming(now))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.start_time);
        Ok(sessions)
    }

    async fn list_active_products(&self) -> CatalogResult<Vec<Product>> {
        let mut products: Vec<_> = self.products.iter().filter(|p| p.is_active).cloned().collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn list_messages(&self) -> CatalogResult<Vec<Message>> {
        let mut messages = self.messages.clone();
        messages.sort_by_key(|m| m.created_at);
        Ok(messages)
    }
}
