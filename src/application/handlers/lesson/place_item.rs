//! PlaceItemHandler - Command handler for moving an item within a lesson.
//!
//! The item is slotted between its new neighbours when their indices leave
//! a gap; otherwise the whole lesson is renumbered onto the step grid.

use std::sync::Arc;

use crate::domain::foundation::LessonId;
use crate::domain::lesson::{
    index_between, renumber, ContentSequencer, ItemRef, LessonError, ORDER_STEP,
};
use crate::ports::{LessonContentReader, LessonContentWriter};

#[derive(Debug, Clone)]
pub struct PlaceItemCommand {
    pub lesson_id: LessonId,
    pub item: ItemRef,
    /// Item to place after; `None` moves the item to the start.
    pub after: Option<ItemRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceItemResult {
    pub order_index: i32,
    /// Number of rows whose index changed, including the placed item.
    pub updated: usize,
    pub renumbered: bool,
}

pub struct PlaceItemHandler {
    reader: Arc<dyn LessonContentReader>,
    writer: Arc<dyn LessonContentWriter>,
}

impl PlaceItemHandler {
    pub fn new(reader: Arc<dyn LessonContentReader>, writer: Arc<dyn LessonContentWriter>) -> Self {
        Self { reader, writer }
    }

    pub async fn handle(&self, cmd: PlaceItemCommand) -> Result<PlaceItemResult, LessonError> {
        if cmd.after == Some(cmd.item) {
            return Err(LessonError::validation("after", "an item cannot be placed after itself"));
        }

        let blocks = self.reader.content_blocks(cmd.lesson_id).await?;
        let elements = self.reader.active_elements(cmd.lesson_id).await?;
        let sequence = ContentSequencer::sequence(blocks, elements);

        let mut order: Vec<(ItemRef, i32)> = sequence
            .iter()
            .map(|item| (item.item_ref(), item.order_index()))
            .collect();

        let current = order
            .iter()
            .position(|(r, _)| *r == cmd.item)
            .ok_or_else(|| LessonError::validation("item", "item is not part of this lesson"))?;
        let (_, current_index) = order.remove(current);

        let insert_at = match cmd.after {
            None => 0,
            Some(after) => {
                order
                    .iter()
                    .position(|(r, _)| *r == after)
                    .ok_or_else(|| LessonError::validation("after", "item is not part of this lesson"))?
                    + 1
            }
        };

        let prev = insert_at.checked_sub(1).map(|i| order[i].1);
        let next = order.get(insert_at).map(|(_, index)| *index);

        if let Some(order_index) = index_between(prev, next) {
            self.writer
                .set_order_indices(&[(cmd.item, order_index)])
                .await?;
            return Ok(PlaceItemResult {
                order_index,
                updated: 1,
                renumbered: false,
            });
        }

        order.insert(insert_at, (cmd.item, current_index));
        let updates = renumber(&order);
        let order_index = ORDER_STEP.saturating_mul(insert_at as i32 + 1);

        tracing::info!(
            lesson_id = %cmd.lesson_id,
            updated = updates.len(),
            "No free order_index between neighbours, lesson renumbered"
        );
        self.writer.set_order_indices(&updates).await?;

        Ok(PlaceItemResult {
            order_index,
            updated: updates.len(),
            renumbered: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLessonContent;
    use crate::domain::foundation::{ContentBlockId, ElementId};
    use crate::domain::lesson::{ContentBlock, ElementType, InteractiveElement};

    async fn lesson(block_indices: &[i32], element_index: i32) -> Arc<InMemoryLessonContent> {
        let store = Arc::new(InMemoryLessonContent::new());
        for (i, idx) in block_indices.iter().enumerate() {
            store
                .insert_block(ContentBlock::new(
                    ContentBlockId::new(i as i64 + 1),
                    LessonId::new(1),
                    "Block",
                    "...",
                    *idx,
                ))
                .await;
        }
        store
            .insert_element(InteractiveElement::from_stored(
                ElementId::new(100),
                LessonId::new(1),
                ElementType::PromptBuilder,
                "Builder",
                None,
                None,
                element_index,
                true,
            ))
            .await;
        store
    }

    fn block(id: i64) -> ItemRef {
        ItemRef::Content(ContentBlockId::new(id))
    }

    const ELEMENT: ItemRef = ItemRef::Interactive(ElementId::new(100));

    #[tokio::test]
    async fn slots_into_gap_between_neighbours() {
        let store = lesson(&[10, 20, 30], 40).await;
        let handler = PlaceItemHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(PlaceItemCommand {
                lesson_id: LessonId::new(1),
                item: ELEMENT,
                after: Some(block(1)),
            })
            .await
            .unwrap();

        assert_eq!(result, PlaceItemResult { order_index: 15, updated: 1, renumbered: false });
        assert_eq!(store.order_index_of(ELEMENT).await, Some(15));
    }

    #[tokio::test]
    async fn renumbers_when_no_gap_is_left() {
        let store = lesson(&[10, 11, 12], 40).await;
        let handler = PlaceItemHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(PlaceItemCommand {
                lesson_id: LessonId::new(1),
                item: ELEMENT,
                after: Some(block(1)),
            })
            .await
            .unwrap();

        assert!(result.renumbered);
        assert_eq!(result.order_index, 20);
        assert_eq!(store.order_index_of(block(1)).await, Some(10));
        assert_eq!(store.order_index_of(ELEMENT).await, Some(20));
        assert_eq!(store.order_index_of(block(2)).await, Some(30));
        assert_eq!(store.order_index_of(block(3)).await, Some(40));
    }

    #[tokio::test]
    async fn moves_to_start_when_no_anchor_given() {
        let store = lesson(&[10, 20], 40).await;
        let handler = PlaceItemHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(PlaceItemCommand {
                lesson_id: LessonId::new(1),
                item: ELEMENT,
                after: None,
            })
            .await
            .unwrap();

        assert_eq!(result.order_index, 0);
    }

    #[tokio::test]
    async fn unknown_anchor_is_rejected() {
        let store = lesson(&[10], 40).await;
        let handler = PlaceItemHandler::new(store.clone(), store);

        let result = handler
            .handle(PlaceItemCommand {
                lesson_id: LessonId::new(1),
                item: ELEMENT,
                after: Some(block(77)),
            })
            .await;

        assert!(matches!(result, Err(LessonError::ValidationFailed { ref field, .. }) if field == "after"));
    }
}
