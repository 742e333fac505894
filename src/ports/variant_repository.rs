//! VariantRepository port - Storage of A/B test variants.

use async_trait::async_trait;

use crate::domain::analytics::AbTestVariant;
use crate::domain::foundation::{DomainError, ElementId};

#[async_trait]
pub trait VariantRepository: Send + Sync {
    async fn create(&self, variant: &AbTestVariant) -> Result<(), DomainError>;

    /// Active variants of an element in creation order.
    async fn active_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AbTestVariant>, DomainError>;

    /// Every variant of an element in creation order, active or not.
    async fn all_for_element(&self, element_id: ElementId)
        -> Result<Vec<AbTestVariant>, DomainError>;
}
