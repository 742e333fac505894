//! In-memory lesson content store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ElementId, ErrorCode, LessonId};
use crate::domain::lesson::{ContentBlock, ElementType, InteractiveElement, ItemRef};
use crate::ports::{LessonContentReader, LessonContentWriter};

/// Holds content blocks and interactive elements in memory.
///
/// Implements both the reader and writer ports; used by tests and local runs
/// without a database.
#[derive(Default)]
pub struct InMemoryLessonContent {
    blocks: RwLock<Vec<ContentBlock>>,
    elements: RwLock<Vec<InteractiveElement>>,
}

impl InMemoryLessonContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_block(&self, block: ContentBlock) {
        self.blocks.write().await.push(block);
    }

    pub async fn insert_element(&self, element: InteractiveElement) {
        self.elements.write().await.push(element);
    }

    // === Test Helpers ===

    pub async fn order_index_of(&self, item: ItemRef) -> Option<i32> {
        match item {
            ItemRef::Content(id) => self
                .blocks
                .read()
                .await
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.order_index),
            ItemRef::Interactive(id) => self
                .elements
                .read()
                .await
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.order_index),
        }
    }
}

#[async_trait]
impl LessonContentReader for InMemoryLessonContent {
    async fn content_blocks(&self, lesson_id: LessonId) -> Result<Vec<ContentBlock>, DomainError> {
        Ok(self
            .blocks
            .read()
            .await
            .iter()
            .filter(|b| b.lesson_id == lesson_id)
            .cloned()
            .collect())
    }

    async fn active_elements(
        &self,
        lesson_id: LessonId,
    ) -> Result<Vec<InteractiveElement>, DomainError> {
        Ok(self
            .elements
            .read()
            .await
            .iter()
            .filter(|e| e.lesson_id == lesson_id && e.is_active)
            .cloned()
            .collect())
    }

    async fn element(&self, element_id: ElementId) -> Result<Option<InteractiveElement>, DomainError> {
        Ok(self
            .elements
            .read()
            .await
            .iter()
            .find(|e| e.id == element_id)
            .cloned())
    }
}

#[async_trait]
impl LessonContentWriter for InMemoryLessonContent {
    async fn set_order_indices(&self, updates: &[(ItemRef, i32)]) -> Result<(), DomainError> {
        let mut blocks = self.blocks.write().await;
        let mut elements = self.elements.write().await;

        // Validate everything first so a bad reference changes nothing.
        for (item, _) in updates {
            let found = match item {
                ItemRef::Content(id) => blocks.iter().any(|b| b.id == *id),
                ItemRef::Interactive(id) => elements.iter().any(|e| e.id == *id),
            };
            if !found {
                return Err(DomainError::new(
                    ErrorCode::ElementNotFound,
                    format!("No row for {:?}", item),
                ));
            }
        }

        for (item, index) in updates {
            match item {
                ItemRef::Content(id) => {
                    if let Some(block) = blocks.iter_mut().find(|b| b.id == *id) {
                        block.order_index = *index;
                    }
                }
                ItemRef::Interactive(id) => {
                    if let Some(element) = elements.iter_mut().find(|e| e.id == *id) {
                        element.order_index = *index;
                    }
                }
            }
        }
        Ok(())
    }

    async fn deactivate_element_types(
        &self,
        lesson_ids: &[LessonId],
        element_types: &[ElementType],
    ) -> Result<u64, DomainError> {
        let mut changed = 0;
        for element in self.elements.write().await.iter_mut() {
            if element.is_active
                && lesson_ids.contains(&element.lesson_id)
                && element_types.contains(&element.element_type)
            {
                element.is_active = false;
                changed += 1;
            }
        }
        Ok(changed)
    }
}
