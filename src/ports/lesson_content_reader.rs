//! LessonContentReader port - Read access to authored lesson content.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ElementId, LessonId};
use crate::domain::lesson::{ContentBlock, InteractiveElement};

/// Reads content blocks and interactive elements for presentation.
///
/// Implementations decode element configuration while mapping rows, so a
/// returned [`InteractiveElement`] already carries its typed payload or the
/// reason it could not be decoded. Rows with an unknown element type are
/// skipped with a warning.
#[async_trait]
pub trait LessonContentReader: Send + Sync {
    /// All content blocks of a lesson, in no particular order.
    async fn content_blocks(&self, lesson_id: LessonId) -> Result<Vec<ContentBlock>, DomainError>;

    /// Active interactive elements of a lesson, in no particular order.
    async fn active_elements(
        &self,
        lesson_id: LessonId,
    ) -> Result<Vec<InteractiveElement>, DomainError>;

    /// A single element regardless of its active flag.
    async fn element(&self, element_id: ElementId) -> Result<Option<InteractiveElement>, DomainError>;
}
