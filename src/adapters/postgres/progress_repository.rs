//! PostgreSQL implementation of ElementProgressRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ElementId, LessonId, UserId};
use crate::domain::lesson::ElementProgress;
use crate::ports::ElementProgressRepository;

use super::db_error;

#[derive(Clone)]
pub struct PostgresProgressRepository {
    pool: PgPool,
}

impl PostgresProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ElementProgressRepository for PostgresProgressRepository {
    async fn upsert(&self, progress: &ElementProgress) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO element_progress (
                user_id, lesson_id, element_id, completed, completed_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (user_id, element_id) DO UPDATE SET
                lesson_id = EXCLUDED.lesson_id,
                completed = EXCLUDED.completed,
                completed_at = COALESCE(element_progress.completed_at, EXCLUDED.completed_at),
                updated_at = NOW()
            "#,
        )
        .bind(progress.user_id.as_str())
        .bind(progress.lesson_id.value())
        .bind(progress.element_id.value())
        .bind(progress.completed)
        .bind(progress.completed_at.map(|ts| *ts.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("upsert element progress", e))?;

        Ok(())
    }

    async fn completed_elements(
        &self,
        user_id: &UserId,
        lesson_id: LessonId,
    ) -> Result<Vec<ElementId>, DomainError> {
        let ids: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT element_id
            FROM element_progress
            WHERE user_id = $1 AND lesson_id = $2 AND completed = TRUE
            ORDER BY element_id
            "#,
        )
        .bind(user_id.as_str())
        .bind(lesson_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch completed elements", e))?;

        Ok(ids.into_iter().map(|(id,)| ElementId::new(id)).collect())
    }
}
