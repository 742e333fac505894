//! GetVariantResultsHandler - Query handler for experiment outcomes.

use std::sync::Arc;

use crate::domain::analytics::{variant_results, ExperimentError, VariantResults};
use crate::domain::foundation::ElementId;
use crate::ports::{AnalyticsEventReader, VariantRepository};

#[derive(Debug, Clone)]
pub struct GetVariantResultsQuery {
    pub element_id: ElementId,
}

pub struct GetVariantResultsHandler {
    variants: Arc<dyn VariantRepository>,
    events: Arc<dyn AnalyticsEventReader>,
}

impl GetVariantResultsHandler {
    pub fn new(variants: Arc<dyn VariantRepository>, events: Arc<dyn AnalyticsEventReader>) -> Self {
        Self { variants, events }
    }

    pub async fn handle(
        &self,
        query: GetVariantResultsQuery,
    ) -> Result<Vec<VariantResults>, ExperimentError> {
        let variants = self.variants.all_for_element(query.element_id).await?;
        if variants.is_empty() {
            return Ok(Vec::new());
        }
        let events = self.events.events_for_element(query.element_id).await?;
        Ok(variant_results(&variants, &events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAnalyticsStore, InMemoryVariantRepository};
    use crate::domain::analytics::{AbTestVariant, EventKind, TrackEvent};
    use crate::domain::foundation::{AnalyticsSessionId, LessonId, Timestamp, UserId, VariantId};
    use crate::domain::lesson::ElementType;
    use crate::ports::AnalyticsEventWriter;
    use serde_json::json;

    #[tokio::test]
    async fn reports_each_variant_including_inactive() {
        let repo = Arc::new(InMemoryVariantRepository::new());
        let store = Arc::new(InMemoryAnalyticsStore::new());
        let mut variants = Vec::new();
        for (name, active) in [("A", true), ("B", false)] {
            let variant = AbTestVariant {
                id: VariantId::new(),
                element_id: ElementId::new(99),
                name: name.to_string(),
                configuration: json!({}),
                weight: 1.0,
                is_active: active,
            };
            repo.create(&variant).await.unwrap();
            variants.push(variant);
        }

        let started = TrackEvent::new(
            ElementId::new(99),
            ElementType::SubjectLineTester,
            LessonId::new(1),
            UserId::new("learner").unwrap(),
            EventKind::ElementStarted,
        )
        .with_payload(json!({ "variant_id": variants[0].id.to_string() }))
        .stamp(Timestamp::now(), AnalyticsSessionId::new());
        store.insert_batch(&[started]).await.unwrap();

        let handler = GetVariantResultsHandler::new(repo, store);
        let results = handler
            .handle(GetVariantResultsQuery {
                element_id: ElementId::new(99),
            })
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sample_size, 1);
        assert_eq!(results[1].sample_size, 0);
    }
}
