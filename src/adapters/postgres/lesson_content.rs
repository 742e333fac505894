//! PostgreSQL implementation of the lesson content ports.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{ContentBlockId, DomainError, ElementId, ErrorCode, LessonId};
use crate::domain::lesson::{ContentBlock, ElementType, InteractiveElement, ItemRef};
use crate::ports::{LessonContentReader, LessonContentWriter};

use super::db_error;

const ELEMENT_COLUMNS: &str =
    "id, lesson_id, type, title, content, configuration, order_index, is_active";

/// Reads and reorders lesson content stored in PostgreSQL.
#[derive(Clone)]
pub struct PostgresLessonContent {
    pool: PgPool,
}

impl PostgresLessonContent {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LessonContentReader for PostgresLessonContent {
    async fn content_blocks(&self, lesson_id: LessonId) -> Result<Vec<ContentBlock>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, lesson_id, title, content, order_index
            FROM content_blocks
            WHERE lesson_id = $1
            "#,
        )
        .bind(lesson_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch content blocks", e))?;

        rows.iter().map(row_to_block).collect()
    }

    async fn active_elements(
        &self,
        lesson_id: LessonId,
    ) -> Result<Vec<InteractiveElement>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM interactive_elements WHERE lesson_id = $1 AND is_active = TRUE",
            ELEMENT_COLUMNS
        ))
        .bind(lesson_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch interactive elements", e))?;

        let mut elements = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(element) = row_to_element(row)? {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    async fn element(&self, element_id: ElementId) -> Result<Option<InteractiveElement>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM interactive_elements WHERE id = $1",
            ELEMENT_COLUMNS
        ))
        .bind(element_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch interactive element", e))?;

        match row {
            Some(row) => row_to_element(&row),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl LessonContentWriter for PostgresLessonContent {
    async fn set_order_indices(&self, updates: &[(ItemRef, i32)]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin transaction", e))?;

        for (item, order_index) in updates {
            let (sql, id) = match item {
                ItemRef::Content(id) => (
                    "UPDATE content_blocks SET order_index = $2 WHERE id = $1",
                    id.value(),
                ),
                ItemRef::Interactive(id) => (
                    "UPDATE interactive_elements SET order_index = $2 WHERE id = $1",
                    id.value(),
                ),
            };

            let result = sqlx::query(sql)
                .bind(id)
                .bind(*order_index)
                .execute(&mut *tx)
                .await
                .map_err(|e| db_error("update order index", e))?;

            // Dropping the transaction rolls back earlier updates.
            if result.rows_affected() == 0 {
                return Err(DomainError::new(
                    ErrorCode::ElementNotFound,
                    format!("No row for {:?}", item),
                ));
            }
        }

        tx.commit()
            .await
            .map_err(|e| db_error("commit transaction", e))
    }

    async fn deactivate_element_types(
        &self,
        lesson_ids: &[LessonId],
        element_types: &[ElementType],
    ) -> Result<u64, DomainError> {
        let lessons: Vec<i64> = lesson_ids.iter().map(|id| id.value()).collect();
        let types: Vec<String> = element_types.iter().map(|t| t.as_str().to_string()).collect();

        let result = sqlx::query(
            r#"
            UPDATE interactive_elements
            SET is_active = FALSE
            WHERE is_active = TRUE
              AND lesson_id = ANY($1)
              AND type = ANY($2)
            "#,
        )
        .bind(&lessons)
        .bind(&types)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deactivate elements", e))?;

        Ok(result.rows_affected())
    }
}

fn row_to_block(row: &PgRow) -> Result<ContentBlock, DomainError> {
    let id: i64 = row.try_get("id").map_err(|e| db_error("read id", e))?;
    let lesson_id: i64 = row
        .try_get("lesson_id")
        .map_err(|e| db_error("read lesson_id", e))?;
    let title: String = row.try_get("title").map_err(|e| db_error("read title", e))?;
    let content: String = row
        .try_get("content")
        .map_err(|e| db_error("read content", e))?;
    let order_index: i32 = row
        .try_get("order_index")
        .map_err(|e| db_error("read order_index", e))?;

    Ok(ContentBlock::new(
        ContentBlockId::new(id),
        LessonId::new(lesson_id),
        title,
        content,
        order_index,
    ))
}

/// Rows with a type tag this build does not know are skipped.
fn row_to_element(row: &PgRow) -> Result<Option<InteractiveElement>, DomainError> {
    let id: i64 = row.try_get("id").map_err(|e| db_error("read id", e))?;
    let type_tag: String = row.try_get("type").map_err(|e| db_error("read type", e))?;

    let element_type: ElementType = match type_tag.parse() {
        Ok(element_type) => element_type,
        Err(_) => {
            tracing::warn!(element_id = id, element_type = %type_tag, "Skipping element with unknown type");
            return Ok(None);
        }
    };

    let lesson_id: i64 = row
        .try_get("lesson_id")
        .map_err(|e| db_error("read lesson_id", e))?;
    let title: String = row.try_get("title").map_err(|e| db_error("read title", e))?;
    let content: Option<String> = row
        .try_get("content")
        .map_err(|e| db_error("read content", e))?;
    let configuration: Option<Value> = row
        .try_get("configuration")
        .map_err(|e| db_error("read configuration", e))?;
    let order_index: i32 = row
        .try_get("order_index")
        .map_err(|e| db_error("read order_index", e))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| db_error("read is_active", e))?;

    Ok(Some(InteractiveElement::from_stored(
        ElementId::new(id),
        LessonId::new(lesson_id),
        element_type,
        title,
        content,
        configuration.as_ref(),
        order_index,
        is_active,
    )))
}
