//! PostgreSQL Repository Implementation

use auth::domain::value_object::user_role::UserRole;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Message, Person, Product, Workout, WorkoutSession};
use crate::domain::repository::CatalogRepository;
use crate::domain::value_objects::{Difficulty, SessionStatus};
use crate::error::{CatalogError, CatalogResult};

#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for PgCatalogRepository {
    async fn list_workouts(&self) -> CatalogResult<Vec<Workout>> {
        let rows = sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT
                workout_id,
                title,
                description,
                thumbnail,
                workout_type,
                duration_minutes,
                difficulty,
                is_live,
                created_at
            FROM workouts
            ORDER BY created_at DESC, workout_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WorkoutRow::into_workout).collect()
    }

    async fn list_upcoming_sessions(&self, now: DateTime<Utc>) -> CatalogResult<Vec<WorkoutSession>> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                s.session_id,
                s.start_time,
                s.end_time,
                s.status,
                w.workout_id,
                w.title,
                w.description,
                w.thumbnail,
                w.workout_type,
                w.duration_minutes,
                w.difficulty,
                w.is_live,
                w.created_at,
                u.user_id,
                u.first_name,
                u.last_name,
                u.user_role
            FROM workout_sessions s
            JOIN workouts w ON w.workout_id = s.workout_id
            JOIN users u ON u.user_id = s.trainer_id
            WHERE s.start_time >= $1
            ORDER BY s.start_time ASC, s.session_id
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    async fn list_active_products(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                title,
                description,
                image_url,
                amazon_url,
                category,
                is_active,
                created_at
            FROM products
            WHERE is_active
            ORDER BY created_at DESC, product_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn list_messages(&self) -> CatalogResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT
                m.message_id,
                m.content,
                m.created_at,
                u.user_id,
                u.first_name,
                u.last_name,
                u.user_role
            FROM messages m
            JOIN users u ON u.user_id = m.sender_id
            ORDER BY m.created_at ASC, m.message_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MessageRow::into_message).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct WorkoutRow {
    workout_id: Uuid,
    title: String,
    description: String,
    thumbnail: Option<String>,
    workout_type: String,
    duration_minutes: i32,
    difficulty: String,
    is_live: bool,
    created_at: DateTime<Utc>,
}

impl WorkoutRow {
    fn into_workout(self) -> CatalogResult<Workout> {
        let difficulty = Difficulty::from_code(&self.difficulty).ok_or_else(|| {
            CatalogError::CorruptRow(format!("workout difficulty {}", self.difficulty))
        })?;

        Ok(Workout {
            id: self.workout_id.into(),
            title: self.title,
            description: self.description,
            thumbnail: self.thumbnail,
            workout_type: self.workout_type,
            duration_minutes: self.duration_minutes,
            difficulty,
            is_live: self.is_live,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PersonRow {
    user_id: Uuid,
    first_name: String,
    last_name: String,
    user_role: String,
}

impl PersonRow {
    fn into_person(self) -> CatalogResult<Person> {
        let role = UserRole::from_code(&self.user_role)
            .ok_or_else(|| CatalogError::CorruptRow(format!("user role {}", self.user_role)))?;

        Ok(Person {
            user_id: self.user_id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            role,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    #[sqlx(flatten)]
    workout: WorkoutRow,
    #[sqlx(flatten)]
    trainer: PersonRow,
}

impl SessionRow {
    fn into_session(self) -> CatalogResult<WorkoutSession> {
        let status = SessionStatus::from_code(&self.status)
            .ok_or_else(|| CatalogError::CorruptRow(format!("session status {}", self.status)))?;

        Ok(WorkoutSession {
            id: self.session_id.into(),
            workout: self.workout.into_workout()?,
            trainer: self.trainer.into_person()?,
            start_time: self.start_time,
            end_time: self.end_time,
            status,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    title: String,
    description: String,
    image_url: String,
    amazon_url: String,
    category: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: self.product_id.into(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            amazon_url: self.amazon_url,
            category: self.category,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    message_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    #[sqlx(flatten)]
    sender: PersonRow,
}

impl MessageRow {
    fn into_message(self) -> CatalogResult<Message> {
        Ok(Message {
            id: self.message_id.into(),
            content: self.content,
            sender: self.sender.into_person()?,
            created_at: self.created_at,
        })
    }
}
