//! Use case and router tests against the in-memory catalog

use auth::domain::value_object::user_role::UserRole;
use chrono::{DateTime, Duration, Utc};
use kernel::id::{MessageId, ProductId, UserId, WorkoutId, WorkoutSessionId};

use crate::domain::entities::{Message, Person, Product, Workout, WorkoutSession};
use crate::domain::value_objects::{Difficulty, SessionStatus};
use crate::infra::memory::MemoryCatalogRepository;

fn person(first: &str, last: &str, role: UserRole) -> Person {
    Person {
        user_id: UserId::new(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role,
    }
}

fn workout(title: &str, workout_type: &str, is_live: bool, created_at: DateTime<Utc>) -> Workout {
    Workout {
        id: WorkoutId::new(),
        title: title.to_string(),
        description: format!("{title} description"),
        thumbnail: None,
        workout_type: workout_type.to_string(),
        duration_minutes: 45,
        difficulty: Difficulty::Beginner,
        is_live,
        created_at,
    }
}

fn session(title: &str, start_time: DateTime<Utc>) -> WorkoutSession {
    WorkoutSession {
        id: WorkoutSessionId::new(),
        workout: workout(title, "Strength", false, start_time - Duration::days(30)),
        trainer: person("Sam", "Reyes", UserRole::Trainer),
        start_time,
        end_time: start_time + Duration::hours(1),
        status: SessionStatus::Scheduled,
    }
}

fn product(title: &str, category: &str, is_active: bool, created_at: DateTime<Utc>) -> Product {
    Product {
        id: ProductId::new(),
        title: title.to_string(),
        description: String::new(),
        image_url: format!("https://img.example/{title}.jpg"),
        amazon_url: format!("https://amazon.example/{title}"),
        category: category.to_string(),
        is_active,
        created_at,
    }
}

fn message(content: &str, sender: Person, created_at: DateTime<Utc>) -> Message {
    Message {
        id: MessageId::new(),
        content: content.to_string(),
        sender,
        created_at,
    }
}

fn seeded(now: DateTime<Utc>) -> MemoryCatalogRepository {
    MemoryCatalogRepository::new()
        .with_workout(workout("Old Yoga", "Yoga", false, now - Duration::days(3)))
        .with_workout(workout("Live HIIT", "HIIT", true, now - Duration::days(1)))
        .with_workout(workout("Core", "Pilates", false, now - Duration::days(2)))
        .with_session(session("Later", now + Duration::days(2)))
        .with_session(session("Past", now - Duration::hours(2)))
        .with_session(session("Soon", now + Duration::hours(3)))
        .with_product(product("Mat", "Mats", true, now - Duration::days(5)))
        .with_product(product("Kettlebell", "Weights", true, now - Duration::days(1)))
        .with_product(product("Retired Band", "Bands", false, now))
        .with_product(product("Dumbbell", "Weights", true, now - Duration::days(2)))
        .with_message(message(
            "See you at 6",
            person("Sam", "Reyes", UserRole::Trainer),
            now - Duration::minutes(5),
        ))
        .with_message(message(
            "Can I join late?",
            person("Morgan", "Lee", UserRole::Customer),
            now - Duration::minutes(10),
        ))
}

mod use_case_tests {
    use super::*;
    use crate::application::{
        ListMessagesUseCase, ListProductsUseCase, ListUpcomingSessionsUseCase, ListWorkoutsUseCase,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_workouts_newest_first() {
        let repo = Arc::new(seeded(Utc::now()));
        let workouts = ListWorkoutsUseCase::new(repo).execute().await.unwrap();

        let titles: Vec<_> = workouts.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["Live HIIT", "Core", "Old Yoga"]);
    }

    #[tokio::test]
    async fn test_sessions_upcoming_soonest_first() {
        let now = Utc::now();
        let repo = Arc::new(seeded(now));
        let sessions = ListUpcomingSessionsUseCase::new(repo).execute(now).await.unwrap();

        let titles: Vec<_> = sessions.iter().map(|s| s.workout.title.as_str()).collect();
        assert_eq!(titles, vec!["Soon", "Later"]);
        assert_eq!(sessions[0].trainer.first_name, "Sam");
    }

    #[tokio::test]
    async fn test_products_unfiltered() {
        let repo = Arc::new(seeded(Utc::now()));
        let listing = ListProductsUseCase::new(repo).execute(None).await.unwrap();

        let titles: Vec<_> = listing.products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Kettlebell", "Dumbbell", "Mat"]);
        assert_eq!(listing.categories, vec!["Weights", "Mats"]);
        assert_eq!(listing.selected_category, "");
    }

    #[tokio::test]
    async fn test_products_filtered_keeps_all_categories() {
        let repo = Arc::new(seeded(Utc::now()));
        let listing = ListProductsUseCase::new(repo)
            .execute(Some("Mats"))
            .await
            .unwrap();

        assert_eq!(listing.products.len(), 1);
        assert_eq!(listing.products[0].title, "Mat");
        assert_eq!(listing.categories, vec!["Weights", "Mats"]);
        assert_eq!(listing.selected_category, "Mats");
    }

    #[tokio::test]
    async fn test_inactive_category_is_not_offered() {
        let repo = Arc::new(seeded(Utc::now()));
        let listing = ListProductsUseCase::new(repo)
            .execute(Some("Bands"))
            .await
            .unwrap();

        assert!(listing.products.is_empty());
        assert!(!listing.categories.contains(&"Bands".to_string()));
    }

    #[tokio::test]
    async fn test_messages_oldest_first() {
        let repo = Arc::new(seeded(Utc::now()));
        let messages = ListMessagesUseCase::new(repo).execute().await.unwrap();

        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["Can I join late?", "See you at 6"]);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let repo = Arc::new(MemoryCatalogRepository::new());
        assert!(ListWorkoutsUseCase::new(repo.clone()).execute().await.unwrap().is_empty());
        let listing = ListProductsUseCase::new(repo).execute(Some("Mats")).await.unwrap();
        assert!(listing.products.is_empty());
        assert!(listing.categories.is_empty());
    }
}

mod router_tests {
    use super::*;
    use crate::presentation::router::catalog_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        catalog_router_generic(seeded(Utc::now()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_workouts_page() {
        let (status, body) = get_json(app(), "/workouts").await;

        assert_eq!(status, StatusCode::OK);
        let first = &body["workouts"][0];
        assert_eq!(first["title"], "Live HIIT");
        assert_eq!(first["badge"], "LIVE");
        assert_eq!(first["isLive"], true);
        assert_eq!(first["type"], "HIIT");
        assert_eq!(first["difficulty"], "BEGINNER");
        assert_eq!(body["workouts"][1]["badge"], "Pilates");
    }

    #[tokio::test]
    async fn test_sessions_page() {
        let (status, body) = get_json(app(), "/sessions").await;

        assert_eq!(status, StatusCode::OK);
        let sessions = body["sessions"].as_array().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0]["workout"]["title"], "Soon");
        assert_eq!(sessions[0]["trainer"]["firstName"], "Sam");
        assert_eq!(sessions[0]["trainer"]["role"], "TRAINER");
        assert_eq!(sessions[0]["status"], "SCHEDULED");
    }

    #[tokio::test]
    async fn test_products_page_with_category() {
        let (status, body) = get_json(app(), "/products?category=Weights").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selectedCategory"], "Weights");
        assert_eq!(body["categories"], serde_json::json!(["Weights", "Mats"]));
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["amazonUrl"], "https://amazon.example/Kettlebell");
    }

    #[tokio::test]
    async fn test_products_page_empty_category_means_all() {
        let (_, body) = get_json(app(), "/products?category=").await;

        assert_eq!(body["products"].as_array().unwrap().len(), 3);
        assert_eq!(body["selectedCategory"], "");
    }

    #[tokio::test]
    async fn test_messages_page() {
        let (status, body) = get_json(app(), "/messages").await;

        assert_eq!(status, StatusCode::OK);
        let first = &body["messages"][0];
        assert_eq!(first["content"], "Can I join late?");
        assert_eq!(first["from"]["role"], "CUSTOMER");
        assert_eq!(first["fromCustomer"], true);
        assert_eq!(body["messages"][1]["fromCustomer"], false);
    }

    #[tokio::test]
    async fn test_messages_are_read_only() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
