//! AnalyticsEventReader port - Queries over the event log for dashboards.

use async_trait::async_trait;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::{DomainError, ElementId, LessonId, Timestamp};

#[async_trait]
pub trait AnalyticsEventReader: Send + Sync {
    /// Events with `from <= timestamp <= to`, oldest first, optionally
    /// restricted to one lesson.
    async fn events_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        lesson_id: Option<LessonId>,
    ) -> Result<Vec<AnalyticsEvent>, DomainError>;

    /// Every event recorded for an element, oldest first.
    async fn events_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AnalyticsEvent>, DomainError>;
}
