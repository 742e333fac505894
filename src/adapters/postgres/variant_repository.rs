//! PostgreSQL implementation of VariantRepository.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::analytics::AbTestVariant;
use crate::domain::foundation::{DomainError, ElementId, VariantId};
use crate::ports::VariantRepository;

use super::db_error;

#[derive(Clone)]
pub struct PostgresVariantRepository {
    pool: PgPool,
}

impl PostgresVariantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(
        &self,
        element_id: ElementId,
        active_only: bool,
    ) -> Result<Vec<AbTestVariant>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT variant_id, element_id, variant_name, configuration, weight, is_active
            FROM ab_test_variants
            WHERE element_id = $1 AND (is_active = TRUE OR NOT $2)
            ORDER BY created_at, variant_id
            "#,
        )
        .bind(element_id.value())
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch variants", e))?;

        rows.iter().map(row_to_variant).collect()
    }
}

#[async_trait]
impl VariantRepository for PostgresVariantRepository {
    async fn create(&self, variant: &AbTestVariant) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ab_test_variants (
                variant_id, element_id, variant_name, configuration, weight, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(variant.id.as_uuid())
        .bind(variant.element_id.value())
        .bind(&variant.name)
        .bind(&variant.configuration)
        .bind(variant.weight)
        .bind(variant.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert variant", e))?;

        Ok(())
    }

    async fn active_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AbTestVariant>, DomainError> {
        self.fetch(element_id, true).await
    }

    async fn all_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AbTestVariant>, DomainError> {
        self.fetch(element_id, false).await
    }
}

fn row_to_variant(row: &PgRow) -> Result<AbTestVariant, DomainError> {
    let id: Uuid = row
        .try_get("variant_id")
        .map_err(|e| db_error("read variant_id", e))?;
    let element_id: i64 = row
        .try_get("element_id")
        .map_err(|e| db_error("read element_id", e))?;
    let name: String = row
        .try_get("variant_name")
        .map_err(|e| db_error("read variant_name", e))?;
    let configuration: Value = row
        .try_get("configuration")
        .map_err(|e| db_error("read configuration", e))?;
    let weight: f64 = row.try_get("weight").map_err(|e| db_error("read weight", e))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| db_error("read is_active", e))?;

    Ok(AbTestVariant {
        id: VariantId::from_uuid(id),
        element_id: ElementId::new(element_id),
        name,
        configuration,
        weight,
        is_active,
    })
}
