//! AssignVariantHandler - Picks the variant a learner sees.

use std::sync::Arc;

use crate::application::analytics::AnalyticsCollector;
use crate::domain::analytics::{AbTestVariant, ExperimentError};
use crate::domain::foundation::ElementId;
use crate::ports::VariantRepository;

#[derive(Debug, Clone)]
pub struct AssignVariantQuery {
    pub element_id: ElementId,
}

pub struct AssignVariantHandler {
    variants: Arc<dyn VariantRepository>,
    collector: Arc<AnalyticsCollector>,
}

impl AssignVariantHandler {
    pub fn new(variants: Arc<dyn VariantRepository>, collector: Arc<AnalyticsCollector>) -> Self {
        Self {
            variants,
            collector,
        }
    }

    pub async fn handle(&self, query: AssignVariantQuery) -> Result<AbTestVariant, ExperimentError> {
        let active = self.variants.active_for_element(query.element_id).await?;
        self.collector
            .select_variant(&active)
            .cloned()
            .ok_or(ExperimentError::NoActiveVariants(query.element_id))
    }
}
