//! PostgreSQL implementation of the analytics event ports.
//!
//! Events are appended to `element_analytics_events`; a batch is written in a
//! single transaction so a failure persists none of it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::analytics::{AnalyticsEvent, EventKind};
use crate::domain::foundation::{
    AnalyticsSessionId, DomainError, ElementId, LessonId, Timestamp, UserId,
};
use crate::domain::lesson::ElementType;
use crate::ports::{AnalyticsEventReader, AnalyticsEventWriter};

use super::db_error;

const EVENT_COLUMNS: &str =
    "element_id, element_type, lesson_id, user_id, event_type, event_data, occurred_at, session_id";

#[derive(Clone)]
pub struct PostgresAnalyticsEvents {
    pool: PgPool,
}

impl PostgresAnalyticsEvents {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsEventWriter for PostgresAnalyticsEvents {
    async fn insert_batch(&self, events: &[AnalyticsEvent]) -> Result<(), DomainError> {
        if events.is_empty() {
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin transaction", e))?;

        for event in events {
            sqlx::query(
                r#"
                INSERT INTO element_analytics_events (
                    element_id, element_type, lesson_id, user_id,
                    event_type, event_data, occurred_at, session_id
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(event.element_id.value())
            .bind(event.element_type.as_str())
            .bind(event.lesson_id.value())
            .bind(event.user_id.as_str())
            .bind(event.kind.as_str())
            .bind(&event.payload)
            .bind(event.timestamp.as_datetime())
            .bind(event.session_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("insert analytics event", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("commit analytics batch", e))
    }
}

#[async_trait]
impl AnalyticsEventReader for PostgresAnalyticsEvents {
    async fn events_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        lesson_id: Option<LessonId>,
    ) -> Result<Vec<AnalyticsEvent>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM element_analytics_events
            WHERE occurred_at >= $1 AND occurred_at <= $2
              AND ($3::BIGINT IS NULL OR lesson_id = $3)
            ORDER BY occurred_at, id
            "#,
            EVENT_COLUMNS
        ))
        .bind(from.as_datetime())
        .bind(to.as_datetime())
        .bind(lesson_id.map(|id| id.value()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch analytics events", e))?;

        rows_to_events(&rows)
    }

    async fn events_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AnalyticsEvent>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM element_analytics_events
            WHERE element_id = $1
            ORDER BY occurred_at, id
            "#,
            EVENT_COLUMNS
        ))
        .bind(element_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch element events", e))?;

        rows_to_events(&rows)
    }
}

fn rows_to_events(rows: &[PgRow]) -> Result<Vec<AnalyticsEvent>, DomainError> {
    let mut events = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(event) = row_to_event(row)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Rows whose type tags no longer parse are skipped rather than failing the
/// whole read.
fn row_to_event(row: &PgRow) -> Result<Option<AnalyticsEvent>, DomainError> {
    let element_type: String = row
        .try_get("element_type")
        .map_err(|e| db_error("read element_type", e))?;
    let event_type: String = row
        .try_get("event_type")
        .map_err(|e| db_error("read event_type", e))?;

    let (element_type, kind) = match (
        element_type.parse::<ElementType>(),
        event_type.parse::<EventKind>(),
    ) {
        (Ok(element_type), Ok(kind)) => (element_type, kind),
        _ => {
            tracing::warn!(%element_type, %event_type, "Skipping analytics row with unknown tag");
            return Ok(None);
        }
    };

    let element_id: i64 = row
        .try_get("element_id")
        .map_err(|e| db_error("read element_id", e))?;
    let lesson_id: i64 = row
        .try_get("lesson_id")
        .map_err(|e| db_error("read lesson_id", e))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| db_error("read user_id", e))?;
    let payload: Option<Value> = row
        .try_get("event_data")
        .map_err(|e| db_error("read event_data", e))?;
    let occurred_at: DateTime<Utc> = row
        .try_get("occurred_at")
        .map_err(|e| db_error("read occurred_at", e))?;
    let session_id: Uuid = row
        .try_get("session_id")
        .map_err(|e| db_error("read session_id", e))?;

    Ok(Some(AnalyticsEvent {
        element_id: ElementId::new(element_id),
        element_type,
        lesson_id: LessonId::new(lesson_id),
        user_id: UserId::new(user_id)?,
        kind,
        payload,
        timestamp: Timestamp::from_datetime(occurred_at),
        session_id: AnalyticsSessionId::from_uuid(session_id),
    }))
}
