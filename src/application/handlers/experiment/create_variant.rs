//! CreateVariantHandler - Command handler for adding an A/B test variant.

use std::sync::Arc;

use crate::domain::analytics::{AbTestVariant, ExperimentError, NewVariant};
use crate::domain::foundation::VariantId;
use crate::ports::{LessonContentReader, VariantRepository};

pub struct CreateVariantHandler {
    reader: Arc<dyn LessonContentReader>,
    variants: Arc<dyn VariantRepository>,
}

impl CreateVariantHandler {
    pub fn new(reader: Arc<dyn LessonContentReader>, variants: Arc<dyn VariantRepository>) -> Self {
        Self { reader, variants }
    }

    pub async fn handle(&self, cmd: NewVariant) -> Result<AbTestVariant, ExperimentError> {
        cmd.validate()?;

        if self.reader.element(cmd.element_id).await?.is_none() {
            return Err(ExperimentError::ElementNotFound(cmd.element_id));
        }

        let variant = cmd.into_variant(VariantId::new())?;
        self.variants.create(&variant).await?;

        tracing::info!(
            element_id = %variant.element_id,
            variant_id = %variant.id,
            weight = variant.weight,
            "Created A/B test variant"
        );
        Ok(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryLessonContent, InMemoryVariantRepository};
    use crate::domain::foundation::{ElementId, LessonId};
    use crate::domain::lesson::{ElementType, InteractiveElement};
    use serde_json::json;

    async fn handler() -> (CreateVariantHandler, Arc<InMemoryVariantRepository>) {
        let content = Arc::new(InMemoryLessonContent::new());
        content
            .insert_element(InteractiveElement::from_stored(
                ElementId::new(99),
                LessonId::new(1),
                ElementType::SubjectLineTester,
                "Subject lines",
                None,
                None,
                10,
                true,
            ))
            .await;
        let variants = Arc::new(InMemoryVariantRepository::new());
        (CreateVariantHandler::new(content, variants.clone()), variants)
    }

    fn new_variant(element: i64, name: &str, weight: f64) -> NewVariant {
        NewVariant {
            element_id: ElementId::new(element),
            name: name.to_string(),
            configuration: json!({ "tone": "warm" }),
            weight,
        }
    }

    #[tokio::test]
    async fn creates_active_variant() {
        let (handler, variants) = handler().await;

        let created = handler.handle(new_variant(99, "Warm", 2.0)).await.unwrap();

        assert!(created.is_active);
        let stored = variants.active_for_element(ElementId::new(99)).await.unwrap();
        assert_eq!(stored, vec![created]);
    }

    #[tokio::test]
    async fn unknown_element_is_not_found() {
        let (handler, _) = handler().await;
        let result = handler.handle(new_variant(5, "Warm", 1.0)).await;
        assert!(matches!(result, Err(ExperimentError::ElementNotFound(_))));
    }

    #[tokio::test]
    async fn negative_weight_is_rejected() {
        let (handler, _) = handler().await;
        let result = handler.handle(new_variant(99, "Warm", -1.0)).await;
        assert!(matches!(result, Err(ExperimentError::ValidationFailed { .. })));
    }
}
