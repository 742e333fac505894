//! ElementProgressRepository port - Per-learner completion records.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ElementId, LessonId, UserId};
use crate::domain::lesson::ElementProgress;

#[async_trait]
pub trait ElementProgressRepository: Send + Sync {
    /// Inserts or replaces the row for `(user, element)`.
    async fn upsert(&self, progress: &ElementProgress) -> Result<(), DomainError>;

    /// Elements of `lesson_id` the learner has completed.
    async fn completed_elements(
        &self,
        user_id: &UserId,
        lesson_id: LessonId,
    ) -> Result<Vec<ElementId>, DomainError>;
}
