//! DeactivateElementTypesHandler - Hides element kinds from lessons.

use std::sync::Arc;

use crate::domain::foundation::LessonId;
use crate::domain::lesson::{ElementType, LessonError};
use crate::ports::LessonContentWriter;

#[derive(Debug, Clone)]
pub struct DeactivateElementTypesCommand {
    pub lesson_ids: Vec<LessonId>,
    /// Kinds to hide; `None` hides every authoring tool.
    pub element_types: Option<Vec<ElementType>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeactivateElementTypesResult {
    pub deactivated: u64,
    pub element_types: Vec<ElementType>,
}

pub struct DeactivateElementTypesHandler {
    writer: Arc<dyn LessonContentWriter>,
}

impl DeactivateElementTypesHandler {
    pub fn new(writer: Arc<dyn LessonContentWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: DeactivateElementTypesCommand,
    ) -> Result<DeactivateElementTypesResult, LessonError> {
        if cmd.lesson_ids.is_empty() {
            return Err(LessonError::validation("lesson_ids", "at least one lesson is required"));
        }

        let element_types = match cmd.element_types {
            Some(types) if types.is_empty() => {
                return Err(LessonError::validation(
                    "element_types",
                    "at least one element type is required",
                ))
            }
            Some(types) => types,
            None => ElementType::ALL
                .iter()
                .copied()
                .filter(ElementType::is_admin_tool)
                .collect(),
        };

        let deactivated = self
            .writer
            .deactivate_element_types(&cmd.lesson_ids, &element_types)
            .await?;

        tracing::info!(
            lessons = cmd.lesson_ids.len(),
            deactivated,
            "Deactivated interactive elements"
        );

        Ok(DeactivateElementTypesResult {
            deactivated,
            element_types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLessonContent;
    use crate::domain::foundation::ElementId;
    use crate::domain::lesson::InteractiveElement;
    use crate::ports::LessonContentReader;

    async fn store() -> Arc<InMemoryLessonContent> {
        let store = Arc::new(InMemoryLessonContent::new());
        let rows = [
            (1, 5, ElementType::InteractiveElementAuditor),
            (2, 5, ElementType::AiEmailComposer),
            (3, 6, ElementType::ContentAuditAgent),
            (4, 5, ElementType::ChapterBuilderAgent),
        ];
        for (id, lesson, element_type) in rows {
            store
                .insert_element(InteractiveElement::from_stored(
                    ElementId::new(id),
                    LessonId::new(lesson),
                    element_type,
                    "Row",
                    None,
                    None,
                    10,
                    true,
                ))
                .await;
        }
        store
    }

    #[tokio::test]
    async fn hides_admin_tools_by_default() {
        let store = store().await;
        let handler = DeactivateElementTypesHandler::new(store.clone());

        let result = handler
            .handle(DeactivateElementTypesCommand {
                lesson_ids: vec![LessonId::new(5)],
                element_types: None,
            })
            .await
            .unwrap();

        assert_eq!(result.deactivated, 2);
        let remaining = store.active_elements(LessonId::new(5)).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].element_type, ElementType::AiEmailComposer);
        assert_eq!(store.active_elements(LessonId::new(6)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn explicit_types_are_respected() {
        let store = store().await;
        let handler = DeactivateElementTypesHandler::new(store.clone());

        let result = handler
            .handle(DeactivateElementTypesCommand {
                lesson_ids: vec![LessonId::new(5), LessonId::new(6)],
                element_types: Some(vec![ElementType::AiEmailComposer]),
            })
            .await
            .unwrap();

        assert_eq!(result.deactivated, 1);
    }

    #[tokio::test]
    async fn empty_lesson_list_is_rejected() {
        let handler = DeactivateElementTypesHandler::new(store().await);
        let result = handler
            .handle(DeactivateElementTypesCommand {
                lesson_ids: vec![],
                element_types: None,
            })
            .await;
        assert!(matches!(result, Err(LessonError::ValidationFailed { .. })));
    }
}
