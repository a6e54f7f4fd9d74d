//! List Upcoming Sessions Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::WorkoutSession;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

pub struct ListUpcomingSessionsUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> ListUpcomingSessionsUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Sessions starting at or after `now`, soonest first
    pub async fn execute(&self, now: DateTime<Utc>) -> CatalogResult<Vec<WorkoutSession>> {
        let sessions = self.repo.list_upcoming_sessions(now).await?;
        tracing::debug!(count = sessions.len(), "Listed upcoming sessions");
        Ok(sessions)
    }
}
