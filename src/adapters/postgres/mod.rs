//! PostgreSQL adapters - Database implementations for persistence ports.
//!
//! - `PostgresLessonContent` - content blocks and interactive elements
//! - `PostgresProgressRepository` - per-learner element completion
//! - `PostgresAnalyticsEvents` - batched interaction log and its read side
//! - `PostgresVariantRepository` - A/B test variants

mod analytics_events;
mod lesson_content;
mod progress_repository;
mod variant_repository;

pub use analytics_events::PostgresAnalyticsEvents;
pub use lesson_content::PostgresLessonContent;
pub use progress_repository::PostgresProgressRepository;
pub use variant_repository::PostgresVariantRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a connection pool sized and timed from `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Applies the schema in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

fn db_error(action: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, err))
}
