//! GetLessonProgressHandler - Query handler for a learner's completion.

use std::sync::Arc;

use crate::domain::foundation::{ElementId, LessonId, UserId};
use crate::domain::lesson::{LessonError, LessonProgress};
use crate::ports::{ElementProgressRepository, LessonContentReader};

#[derive(Debug, Clone)]
pub struct GetLessonProgressQuery {
    pub lesson_id: LessonId,
    pub user_id: UserId,
}

pub struct GetLessonProgressHandler {
    reader: Arc<dyn LessonContentReader>,
    progress: Arc<dyn ElementProgressRepository>,
}

impl GetLessonProgressHandler {
    pub fn new(
        reader: Arc<dyn LessonContentReader>,
        progress: Arc<dyn ElementProgressRepository>,
    ) -> Self {
        Self { reader, progress }
    }

    pub async fn handle(&self, query: GetLessonProgressQuery) -> Result<LessonProgress, LessonError> {
        // Admin tools are hidden from learners and never count toward completion.
        let active: Vec<ElementId> = self
            .reader
            .active_elements(query.lesson_id)
            .await?
            .into_iter()
            .filter(|e| !e.element_type.is_admin_tool())
            .map(|e| e.id)
            .collect();

        let completed = self
            .progress
            .completed_elements(&query.user_id, query.lesson_id)
            .await?;

        Ok(LessonProgress::compute(query.lesson_id, &active, &completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryLessonContent, InMemoryProgressRepository};
    use crate::domain::foundation::Timestamp;
    use crate::domain::lesson::{ElementProgress, ElementType, InteractiveElement};

    fn element(id: i64, element_type: ElementType, is_active: bool) -> InteractiveElement {
        InteractiveElement::from_stored(
            ElementId::new(id),
            LessonId::new(1),
            element_type,
            "Element",
            None,
            None,
            id as i32 * 10,
            is_active,
        )
    }

    #[tokio::test]
    async fn counts_completed_active_learner_elements() {
        let content = Arc::new(InMemoryLessonContent::new());
        content.insert_element(element(1, ElementType::LyraChat, true)).await;
        content.insert_element(element(2, ElementType::AiEmailComposer, true)).await;
        content.insert_element(element(3, ElementType::LyraChat, false)).await;
        content.insert_element(element(4, ElementType::DatabaseDebugger, true)).await;

        let user = UserId::new("learner").unwrap();
        let progress = Arc::new(InMemoryProgressRepository::new());
        for id in [1, 3] {
            progress
                .upsert(&ElementProgress::completed(
                    user.clone(),
                    LessonId::new(1),
                    ElementId::new(id),
                    Timestamp::now(),
                ))
                .await
                .unwrap();
        }

        let handler = GetLessonProgressHandler::new(content, progress);
        let result = handler
            .handle(GetLessonProgressQuery {
                lesson_id: LessonId::new(1),
                user_id: user,
            })
            .await
            .unwrap();

        assert_eq!(result.total_elements, 2);
        assert_eq!(result.completed_elements, vec![ElementId::new(1)]);
        assert_eq!(result.percent_complete.value(), 50);
    }
}
