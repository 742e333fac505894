//! Ordered buffer of events awaiting persistence.

use std::collections::VecDeque;

use super::AnalyticsEvent;

/// An event plus the number of failed flushes it has been part of.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedEvent {
    pub event: AnalyticsEvent,
    pub attempts: u32,
}

impl QueuedEvent {
    pub fn new(event: AnalyticsEvent) -> Self {
        Self { event, attempts: 0 }
    }
}

/// FIFO queue of pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    items: VecDeque<QueuedEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: AnalyticsEvent) {
        self.items.push_back(QueuedEvent::new(event));
    }

    /// Removes and returns everything queued, oldest first.
    pub fn take_all(&mut self) -> Vec<QueuedEvent> {
        self.items.drain(..).collect()
    }

    /// Puts a failed batch back ahead of anything queued since, keeping the
    /// batch's own order.
    pub fn requeue_front(&mut self, batch: Vec<QueuedEvent>) {
        for queued in batch.into_iter().rev() {
            self.items.push_front(queued);
        }
    }

    /// Discards everything; returns how many events were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        self.items.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedEvent> {
        self.items.iter()
    }
}
