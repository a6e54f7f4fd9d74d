//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use chrono::Utc;
use std::sync::Arc;

use crate::application::{
    ListMessagesUseCase, ListProductsUseCase, ListUpcomingSessionsUseCase, ListWorkoutsUseCase,
};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{
    MessageDto, MessagesResponse, ProductQuery, ProductsResponse, SessionDto, SessionsResponse,
    WorkoutDto, WorkoutsResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /workouts
pub async fn list_workouts<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<WorkoutsResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let workouts = ListWorkoutsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(WorkoutsResponse {
        workouts: workouts.iter().map(WorkoutDto::from).collect(),
    }))
}

/// GET /sessions
pub async fn list_sessions<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<SessionsResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let sessions = ListUpcomingSessionsUseCase::new(state.repo.clone())
        .execute(Utc::now())
        .await?;

    Ok(Json(SessionsResponse {
        sessions: sessions.iter().map(SessionDto::from).collect(),
    }))
}

/// GET /products?category=
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<ProductsResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let listing = ListProductsUseCase::new(state.repo.clone())
        .execute(query.category.as_deref())
        .await?;

    Ok(Json(listing.into()))
}

/// GET /messages
pub async fn list_messages<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<MessagesResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let messages = ListMessagesUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(MessagesResponse {
        messages: messages.iter().map(MessageDto::from).collect(),
    }))
}
