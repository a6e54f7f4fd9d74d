//! List Workouts Use Case

use std::sync::Arc;

use crate::domain::entities::Workout;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

pub struct ListWorkoutsUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> ListWorkoutsUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Newest first
    pub async fn execute(&self) -> CatalogResult<Vec<Workout>> {
        let workouts = self.repo.list_workouts().await?;
        tracing::debug!(count = workouts.len(), "Listed workouts");
        Ok(workouts)
    }
}
