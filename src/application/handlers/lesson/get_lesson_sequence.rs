//! GetLessonSequenceHandler - Query handler for a lesson's presentation order.

use std::sync::Arc;

use crate::domain::foundation::LessonId;
use crate::domain::lesson::{ContentSequencer, LessonError, LessonSequence};
use crate::ports::LessonContentReader;

/// Query for the ordered items of a lesson.
#[derive(Debug, Clone)]
pub struct GetLessonSequenceQuery {
    pub lesson_id: LessonId,
    /// Keep authoring tools in the sequence.
    pub include_admin_tools: bool,
}

/// Handler for building a lesson's sequence.
pub struct GetLessonSequenceHandler {
    reader: Arc<dyn LessonContentReader>,
}

impl GetLessonSequenceHandler {
    pub fn new(reader: Arc<dyn LessonContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetLessonSequenceQuery) -> Result<LessonSequence, LessonError> {
        let blocks = self.reader.content_blocks(query.lesson_id).await?;
        let mut elements = self.reader.active_elements(query.lesson_id).await?;
        if !query.include_admin_tools {
            elements.retain(|e| !e.element_type.is_admin_tool());
        }

        let sequence = ContentSequencer::sequence(blocks, elements);

        for collision in sequence.duplicate_indices() {
            tracing::warn!(
                lesson_id = %query.lesson_id,
                order_index = collision.order_index,
                items = collision.items.len(),
                "Lesson items share an order_index"
            );
        }
        for element in sequence.interactive_elements() {
            if let Err(e) = &element.configuration {
                tracing::warn!(
                    lesson_id = %query.lesson_id,
                    element_id = %element.id,
                    error = %e,
                    "Interactive element has unusable configuration"
                );
            }
        }

        Ok(sequence)
    }
}
