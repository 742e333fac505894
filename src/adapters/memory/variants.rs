//! In-memory A/B variant repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::analytics::AbTestVariant;
use crate::domain::foundation::{DomainError, ElementId};
use crate::ports::VariantRepository;

#[derive(Default)]
pub struct InMemoryVariantRepository {
    variants: RwLock<Vec<AbTestVariant>>,
}

impl InMemoryVariantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VariantRepository for InMemoryVariantRepository {
    async fn create(&self, variant: &AbTestVariant) -> Result<(), DomainError> {
        self.variants.write().await.push(variant.clone());
        Ok(())
    }

    async fn active_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AbTestVariant>, DomainError> {
        Ok(self
            .variants
            .read()
            .await
            .iter()
            .filter(|v| v.element_id == element_id && v.is_active)
            .cloned()
            .collect())
    }

    async fn all_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AbTestVariant>, DomainError> {
        Ok(self
            .variants
            .read()
            .await
            .iter()
            .filter(|v| v.element_id == element_id)
            .cloned()
            .collect())
    }
}
