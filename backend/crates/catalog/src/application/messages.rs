//! List Messages Use Case

use std::sync::Arc;

use crate::domain::entities::Message;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

pub struct ListMessagesUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> ListMessagesUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Oldest first, each with its sender
    pub async fn execute(&self) -> CatalogResult<Vec<Message>> {
        self.repo.list_messages().await
    }
}
