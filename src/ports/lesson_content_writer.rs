//! LessonContentWriter port - Authoring-side updates to lesson layout.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LessonId};
use crate::domain::lesson::{ElementType, ItemRef};

#[async_trait]
pub trait LessonContentWriter: Send + Sync {
    /// Applies new `order_index` values, all or none.
    async fn set_order_indices(&self, updates: &[(ItemRef, i32)]) -> Result<(), DomainError>;

    /// Marks every element of `element_types` in `lesson_ids` inactive.
    ///
    /// Returns the number of elements that changed.
    async fn deactivate_element_types(
        &self,
        lesson_ids: &[LessonId],
        element_types: &[ElementType],
    ) -> Result<u64, DomainError>;
}
