//! In-memory analytics event log.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::{DomainError, ElementId, LessonId, Timestamp};
use crate::ports::{AnalyticsEventReader, AnalyticsEventWriter};

/// Event log held in memory.
///
/// Can be told to reject the next N batches to exercise retry paths.
#[derive(Default)]
pub struct InMemoryAnalyticsStore {
    events: RwLock<Vec<AnalyticsEvent>>,
    failures_pending: AtomicUsize,
    batches: AtomicUsize,
}

impl InMemoryAnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `count` calls to `insert_batch` fail.
    pub fn fail_next(&self, count: usize) {
        self.failures_pending.store(count, Ordering::SeqCst);
    }

    // === Test Helpers ===

    pub async fn stored(&self) -> Vec<AnalyticsEvent> {
        self.events.read().await.clone()
    }

    /// Number of batches successfully stored.
    pub fn batch_count(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalyticsEventWriter for InMemoryAnalyticsStore {
    async fn insert_batch(&self, events: &[AnalyticsEvent]) -> Result<(), DomainError> {
        let should_fail = self
            .failures_pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(DomainError::database("simulated analytics write failure"));
        }

        self.events.write().await.extend_from_slice(events);
        self.batches.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl AnalyticsEventReader for InMemoryAnalyticsStore {
    async fn events_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        lesson_id: Option<LessonId>,
    ) -> Result<Vec<AnalyticsEvent>, DomainError> {
        let mut events: Vec<AnalyticsEvent> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| e.timestamp >= from && e.timestamp <= to)
            .filter(|e| lesson_id.map_or(true, |id| e.lesson_id == id))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.timestamp);
        Ok(events)
    }

    async fn events_for_element(
        &self,
        element_id: ElementId,
    ) -> Result<Vec<AnalyticsEvent>, DomainError> {
        let mut events: Vec<AnalyticsEvent> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| e.element_id == element_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.timestamp);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{EventKind, TrackEvent};
    use crate::domain::foundation::{AnalyticsSessionId, UserId};
    use crate::domain::lesson::ElementType;

    fn event(lesson: i64, millis: i64) -> AnalyticsEvent {
        TrackEvent::new(
            ElementId::new(1),
            ElementType::LyraChat,
            LessonId::new(lesson),
            UserId::new("u").unwrap(),
            EventKind::Interaction,
        )
        .stamp(Timestamp::from_unix_millis(millis).unwrap(), AnalyticsSessionId::new())
    }

    #[tokio::test]
    async fn fail_next_rejects_exactly_n_batches() {
        let store = InMemoryAnalyticsStore::new();
        store.fail_next(2);

        assert!(store.insert_batch(&[event(1, 0)]).await.is_err());
        assert!(store.insert_batch(&[event(1, 0)]).await.is_err());
        assert!(store.insert_batch(&[event(1, 0)]).await.is_ok());
        assert_eq!(store.stored().await.len(), 1);
        assert_eq!(store.batch_count(), 1);
    }

    #[tokio::test]
    async fn events_between_filters_window_and_lesson() {
        let store = InMemoryAnalyticsStore::new();
        store
            .insert_batch(&[event(1, 1_000), event(2, 2_000), event(1, 9_000)])
            .await
            .unwrap();

        let from = Timestamp::from_unix_millis(0).unwrap();
        let to = Timestamp::from_unix_millis(5_000).unwrap();
        let all = store.events_between(from, to, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let lesson_one = store
            .events_between(from, to, Some(LessonId::new(1)))
            .await
            .unwrap();
        assert_eq!(lesson_one.len(), 1);
    }
}
