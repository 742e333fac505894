//! AnalyticsCollector - Buffered interaction telemetry.
//!
//! Events are queued in memory and persisted in batches:
//! 1. Callers record events with `track_event` (never blocks on storage)
//! 2. **The run loop flushes the queue** on a fixed interval, or at once
//!    when a critical event arrives
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `flush_interval` | 30s | Time between periodic flushes |
//! | `max_flush_attempts` | 10 | Failed flushes after which an event is dropped |
//! | `default_consent` | false | Consent assumed when none has been stored |
//!
//! ## Failure Handling
//!
//! Storage errors never reach callers. A failed batch goes back to the front
//! of the queue in its original order and is retried on the next flush.
//!
//! ## Graceful Shutdown
//!
//! The run loop listens for a shutdown signal and performs one final flush
//! before returning.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{watch, Mutex, Notify};
use tokio::time::{self, MissedTickBehavior};

use crate::domain::analytics::{
    select_variant, AbTestVariant, AnalyticsEvent, EventQueue, QueuedEvent, TimeTracker,
    TrackEvent,
};
use crate::domain::foundation::{AnalyticsSessionId, Clock, ElementId, SystemClock};
use crate::ports::{AnalyticsEventWriter, ConsentStore};

/// Configuration for the AnalyticsCollector.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Time between periodic flushes.
    pub flush_interval: Duration,

    /// An event is discarded on the failed flush that brings its attempt
    /// count to this value.
    pub max_flush_attempts: u32,

    /// Consent used when the store holds no decision.
    pub default_consent: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            flush_interval: Duration::from_secs(30),
            max_flush_attempts: 10,
            default_consent: false,
        }
    }
}

impl CollectorConfig {
    pub fn with_flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    pub fn with_max_flush_attempts(mut self, attempts: u32) -> Self {
        self.max_flush_attempts = attempts.max(1);
        self
    }

    pub fn with_default_consent(mut self, granted: bool) -> Self {
        self.default_consent = granted;
        self
    }
}

/// What a call to [`AnalyticsCollector::flush`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// Nothing was queued.
    Empty,
    /// The batch was stored.
    Persisted { events: usize },
    /// Storage failed; `requeued` events wait for the next flush and
    /// `dropped` ran out of attempts.
    Requeued { requeued: usize, dropped: usize },
    /// Storage failed after consent was revoked; the batch was discarded.
    Discarded { events: usize },
}

struct CollectorState {
    consent: bool,
    /// Bumped on every revocation so an in-flight batch can tell that the
    /// events it holds were withdrawn.
    consent_epoch: u64,
    queue: EventQueue,
}

impl CollectorState {
    fn revoke(&mut self) -> usize {
        self.consent = false;
        self.consent_epoch += 1;
        self.queue.clear()
    }
}

/// Queues analytics events and flushes them in batches.
///
/// One collector exists per running service; share it behind an `Arc`.
pub struct AnalyticsCollector {
    writer: Arc<dyn AnalyticsEventWriter>,
    consent_store: Arc<dyn ConsentStore>,
    clock: Arc<dyn Clock>,
    config: CollectorConfig,
    session_id: AnalyticsSessionId,
    state: Mutex<CollectorState>,
    timers: Mutex<TimeTracker>,
    flush_lock: Mutex<()>,
    flush_signal: Notify,
}

impl AnalyticsCollector {
    /// Create a collector with default configuration and the system clock.
    pub fn new(writer: Arc<dyn AnalyticsEventWriter>, consent_store: Arc<dyn ConsentStore>) -> Self {
        Self::with_config(
            writer,
            consent_store,
            Arc::new(SystemClock),
            CollectorConfig::default(),
        )
    }

    /// Create a collector with a custom clock and configuration.
    pub fn with_config(
        writer: Arc<dyn AnalyticsEventWriter>,
        consent_store: Arc<dyn ConsentStore>,
        clock: Arc<dyn Clock>,
        config: CollectorConfig,
    ) -> Self {
        Self {
            writer,
            consent_store,
            clock,
            session_id: AnalyticsSessionId::new(),
            state: Mutex::new(CollectorState {
                consent: config.default_consent,
                consent_epoch: 0,
                queue: EventQueue::new(),
            }),
            timers: Mutex::new(TimeTracker::new()),
            flush_lock: Mutex::new(()),
            flush_signal: Notify::new(),
            config,
        }
    }

    pub fn session_id(&self) -> AnalyticsSessionId {
        self.session_id
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Event tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Queues an event. Returns false when consent is not granted, in which
    /// case nothing is recorded.
    ///
    /// Critical events wake the run loop for an immediate flush.
    pub async fn track_event(&self, event: TrackEvent) -> bool {
        let critical = event.kind.is_critical();
        {
            let mut state = self.state.lock().await;
            if !state.consent {
                return false;
            }
            let stamped = event.stamp(self.clock.now(), self.session_id);
            tracing::trace!(
                element_id = %stamped.element_id,
                kind = %stamped.kind,
                "Queued analytics event"
            );
            state.queue.push(stamped);
        }

        if critical {
            self.flush_signal.notify_one();
        }
        true
    }

    /// Persists everything queued as one batch.
    ///
    /// Events queued while the write is in flight stay queued. On failure the
    /// batch returns to the front of the queue, minus events that have used
    /// up their attempts.
    pub async fn flush(&self) -> FlushOutcome {
        let _flushing = self.flush_lock.lock().await;

        let (batch, epoch) = {
            let mut state = self.state.lock().await;
            (state.queue.take_all(), state.consent_epoch)
        };
        if batch.is_empty() {
            return FlushOutcome::Empty;
        }

        let (events, attempts): (Vec<AnalyticsEvent>, Vec<u32>) =
            batch.into_iter().map(|q| (q.event, q.attempts)).unzip();

        match self.writer.insert_batch(&events).await {
            Ok(()) => {
                tracing::debug!(events = events.len(), "Flushed analytics events");
                FlushOutcome::Persisted {
                    events: events.len(),
                }
            }
            Err(e) => {
                let mut state = self.state.lock().await;
                if !state.consent || state.consent_epoch != epoch {
                    tracing::warn!(
                        error = %e,
                        events = events.len(),
                        "Analytics flush failed after consent was revoked, discarding batch"
                    );
                    return FlushOutcome::Discarded {
                        events: events.len(),
                    };
                }

                let max = self.config.max_flush_attempts;
                let mut retry = Vec::with_capacity(events.len());
                let mut dropped = 0;
                for (event, attempts) in events.into_iter().zip(attempts) {
                    let attempts = attempts + 1;
                    if attempts >= max {
                        dropped += 1;
                    } else {
                        retry.push(QueuedEvent { event, attempts });
                    }
                }
                let requeued = retry.len();
                state.queue.requeue_front(retry);

                tracing::warn!(
                    error = %e,
                    requeued,
                    dropped,
                    "Analytics flush failed, batch re-queued"
                );
                FlushOutcome::Requeued { requeued, dropped }
            }
        }
    }

    /// Number of events waiting for a flush.
    pub async fn queued_len(&self) -> usize {
        self.state.lock().await.queue.len()
    }

    /// Snapshot of queued events, oldest first.
    pub async fn queued_events(&self) -> Vec<AnalyticsEvent> {
        self.state
            .lock()
            .await
            .queue
            .iter()
            .map(|q| q.event.clone())
            .collect()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Time tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn start_time_tracking(&self, element_id: ElementId, phase: Option<&str>) {
        let now = self.clock.now();
        self.timers.lock().await.start(element_id, phase, now);
    }

    /// Whole seconds since the matching start, or 0 if there was none.
    pub async fn stop_time_tracking(&self, element_id: ElementId, phase: Option<&str>) -> u64 {
        let now = self.clock.now();
        self.timers.lock().await.stop(element_id, phase, now)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Experiments
    // ════════════════════════════════════════════════════════════════════════════

    /// Weighted random choice among `variants`.
    pub fn select_variant<'a>(&self, variants: &'a [AbTestVariant]) -> Option<&'a AbTestVariant> {
        select_variant(variants, &mut rand::thread_rng())
    }

    /// Weighted choice using the caller's random source.
    pub fn select_variant_with<'a, R: Rng + ?Sized>(
        &self,
        variants: &'a [AbTestVariant],
        rng: &mut R,
    ) -> Option<&'a AbTestVariant> {
        select_variant(variants, rng)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Consent
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn has_consent(&self) -> bool {
        self.state.lock().await.consent
    }

    /// Updates and persists consent. Revoking discards queued events.
    ///
    /// Returns false if the decision could not be persisted; the in-memory
    /// flag is updated either way.
    pub async fn set_consent(&self, granted: bool) -> bool {
        {
            let mut state = self.state.lock().await;
            if granted {
                state.consent = true;
            } else {
                let discarded = state.revoke();
                if discarded > 0 {
                    tracing::info!(discarded, "Analytics consent revoked, queued events discarded");
                }
            }
        }

        match self.consent_store.save(granted).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, granted, "Failed to persist analytics consent");
                false
            }
        }
    }

    /// Reads the persisted decision into the collector.
    ///
    /// Falls back to the configured default when nothing is stored or the
    /// store cannot be read. Returns the effective flag.
    pub async fn load_consent(&self) -> bool {
        let granted = match self.consent_store.load().await {
            Ok(Some(granted)) => granted,
            Ok(None) => self.config.default_consent,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load analytics consent, using default");
                self.config.default_consent
            }
        };

        let mut state = self.state.lock().await;
        if granted {
            state.consent = true;
        } else {
            state.revoke();
        }
        granted
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Lifecycle
    // ════════════════════════════════════════════════════════════════════════════

    /// Run the flush loop until the shutdown signal is received.
    ///
    /// A dropped shutdown sender is treated as a shutdown request.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.flush_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;

        tracing::info!(
            session_id = %self.session_id,
            interval_secs = self.config.flush_interval.as_secs(),
            "Analytics collector started"
        );

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        let outcome = self.flush().await;
                        tracing::info!(?outcome, "Analytics collector stopped");
                        return;
                    }
                }

                _ = self.flush_signal.notified() => {
                    self.flush().await;
                }

                _ = interval.tick() => {
                    self.flush().await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::EventKind;
    use crate::domain::foundation::{DomainError, LessonId, ManualClock, Timestamp, UserId};
    use crate::domain::lesson::ElementType;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// Test implementation of AnalyticsEventWriter
    struct TestEventWriter {
        stored: RwLock<Vec<AnalyticsEvent>>,
        failures_left: AtomicUsize,
    }

    impl TestEventWriter {
        fn new() -> Self {
            Self {
                stored: RwLock::new(Vec::new()),
                failures_left: AtomicUsize::new(0),
            }
        }

        fn failing(times: usize) -> Self {
            let writer = Self::new();
            writer.failures_left.store(times, Ordering::SeqCst);
            writer
        }

        async fn stored_elements(&self) -> Vec<i64> {
            self.stored
                .read()
                .await
                .iter()
                .map(|e| e.element_id.value())
                .collect()
        }
    }

    #[async_trait]
    impl AnalyticsEventWriter for TestEventWriter {
        async fn insert_batch(&self, events: &[AnalyticsEvent]) -> Result<(), DomainError> {
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.store(left - 1, Ordering::SeqCst);
                return Err(DomainError::database("connection refused"));
            }
            self.stored.write().await.extend_from_slice(events);
            Ok(())
        }
    }

    /// Writer that parks inside `insert_batch` until released, so tests can
    /// act while a flush is in flight.
    struct GatedEventWriter {
        entered: Notify,
        release: Notify,
        fail: bool,
        stored: RwLock<Vec<AnalyticsEvent>>,
    }

    impl GatedEventWriter {
        fn new(fail: bool) -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
                fail,
                stored: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AnalyticsEventWriter for GatedEventWriter {
        async fn insert_batch(&self, events: &[AnalyticsEvent]) -> Result<(), DomainError> {
            self.entered.notify_one();
            self.release.notified().await;
            if self.fail {
                return Err(DomainError::database("connection reset"));
            }
            self.stored.write().await.extend_from_slice(events);
            Ok(())
        }
    }

    /// Starts a flush on a task and waits until the writer holds the batch.
    async fn flush_in_flight(
        collector: &Arc<AnalyticsCollector>,
        writer: &GatedEventWriter,
    ) -> tokio::task::JoinHandle<FlushOutcome> {
        let handle = {
            let collector = collector.clone();
            tokio::spawn(async move { collector.flush().await })
        };
        writer.entered.notified().await;
        handle
    }

    /// Test implementation of ConsentStore
    struct TestConsentStore {
        value: RwLock<Option<bool>>,
    }

    impl TestConsentStore {
        fn holding(value: Option<bool>) -> Self {
            Self {
                value: RwLock::new(value),
            }
        }
    }

    #[async_trait]
    impl ConsentStore for TestConsentStore {
        async fn load(&self) -> Result<Option<bool>, DomainError> {
            Ok(*self.value.read().await)
        }

        async fn save(&self, granted: bool) -> Result<(), DomainError> {
            *self.value.write().await = Some(granted);
            Ok(())
        }
    }

    fn track(element: i64, kind: EventKind) -> TrackEvent {
        TrackEvent::new(
            ElementId::new(element),
            ElementType::KnowledgeCheck,
            LessonId::new(1),
            UserId::new("learner-1").unwrap(),
            kind,
        )
    }

    fn collector_with(
        writer: Arc<dyn AnalyticsEventWriter>,
        clock: Arc<ManualClock>,
        config: CollectorConfig,
    ) -> AnalyticsCollector {
        AnalyticsCollector::with_config(
            writer,
            Arc::new(TestConsentStore::holding(None)),
            clock,
            config,
        )
    }

    async fn consenting_collector(writer: Arc<dyn AnalyticsEventWriter>) -> AnalyticsCollector {
        let collector = collector_with(writer, Arc::new(ManualClock::default()), CollectorConfig::default());
        collector.set_consent(true).await;
        collector
    }

    async fn queued_elements(collector: &AnalyticsCollector) -> Vec<i64> {
        collector
            .queued_events()
            .await
            .iter()
            .map(|e| e.element_id.value())
            .collect()
    }

    #[tokio::test]
    async fn events_are_ignored_without_consent() {
        let writer = Arc::new(TestEventWriter::new());
        let collector = collector_with(writer, Arc::new(ManualClock::default()), CollectorConfig::default());

        for _ in 0..3 {
            assert!(!collector.track_event(track(1, EventKind::Interaction)).await);
        }
        assert_eq!(collector.queued_len().await, 0);
    }

    #[tokio::test]
    async fn tracked_events_are_stamped_with_clock_and_session() {
        let writer = Arc::new(TestEventWriter::new());
        let start = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let collector = collector_with(writer, Arc::new(ManualClock::at(start)), CollectorConfig::default());
        collector.set_consent(true).await;

        collector.track_event(track(1, EventKind::ElementStarted)).await;

        let queued = collector.queued_events().await;
        assert_eq!(queued[0].timestamp, start);
        assert_eq!(queued[0].session_id, collector.session_id());
    }

    #[tokio::test]
    async fn successful_flush_empties_queue() {
        let writer = Arc::new(TestEventWriter::new());
        let collector = consenting_collector(writer.clone()).await;
        collector.track_event(track(1, EventKind::Interaction)).await;
        collector.track_event(track(2, EventKind::Interaction)).await;

        assert_eq!(collector.flush().await, FlushOutcome::Persisted { events: 2 });
        assert_eq!(collector.queued_len().await, 0);
        assert_eq!(writer.stored_elements().await, vec![1, 2]);
    }

    #[tokio::test]
    async fn flush_of_empty_queue_does_nothing() {
        let writer = Arc::new(TestEventWriter::new());
        let collector = consenting_collector(writer).await;
        assert_eq!(collector.flush().await, FlushOutcome::Empty);
    }

    #[tokio::test]
    async fn failed_flush_requeues_batch_at_front_in_order() {
        let writer = Arc::new(TestEventWriter::failing(1));
        let collector = consenting_collector(writer.clone()).await;
        collector.track_event(track(1, EventKind::Interaction)).await;
        collector.track_event(track(2, EventKind::Interaction)).await;

        let outcome = collector.flush().await;
        assert_eq!(outcome, FlushOutcome::Requeued { requeued: 2, dropped: 0 });

        collector.track_event(track(3, EventKind::Interaction)).await;
        assert_eq!(queued_elements(&collector).await, vec![1, 2, 3]);

        assert_eq!(collector.flush().await, FlushOutcome::Persisted { events: 3 });
        assert_eq!(writer.stored_elements().await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn successful_flush_keeps_events_tracked_during_the_write() {
        let writer = Arc::new(GatedEventWriter::new(false));
        let collector = Arc::new(consenting_collector(writer.clone()).await);
        collector.track_event(track(1, EventKind::Interaction)).await;
        collector.track_event(track(2, EventKind::Interaction)).await;

        let flushing = flush_in_flight(&collector, &writer).await;
        collector.track_event(track(3, EventKind::Interaction)).await;
        writer.release.notify_one();

        assert_eq!(flushing.await.unwrap(), FlushOutcome::Persisted { events: 2 });
        assert_eq!(queued_elements(&collector).await, vec![3]);
        let stored: Vec<i64> = writer
            .stored
            .read()
            .await
            .iter()
            .map(|e| e.element_id.value())
            .collect();
        assert_eq!(stored, vec![1, 2]);
    }

    #[tokio::test]
    async fn failed_flush_puts_batch_ahead_of_events_tracked_during_the_write() {
        let writer = Arc::new(GatedEventWriter::new(true));
        let collector = Arc::new(consenting_collector(writer.clone()).await);
        collector.track_event(track(1, EventKind::Interaction)).await;
        collector.track_event(track(2, EventKind::Interaction)).await;

        let flushing = flush_in_flight(&collector, &writer).await;
        collector.track_event(track(3, EventKind::Interaction)).await;
        writer.release.notify_one();

        assert_eq!(
            flushing.await.unwrap(),
            FlushOutcome::Requeued { requeued: 2, dropped: 0 }
        );
        assert_eq!(queued_elements(&collector).await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn batch_revoked_during_a_failed_write_is_not_requeued() {
        let writer = Arc::new(GatedEventWriter::new(true));
        let collector = Arc::new(consenting_collector(writer.clone()).await);
        collector.track_event(track(1, EventKind::Interaction)).await;

        let flushing = flush_in_flight(&collector, &writer).await;
        collector.set_consent(false).await;
        collector.set_consent(true).await;
        writer.release.notify_one();

        assert_eq!(flushing.await.unwrap(), FlushOutcome::Discarded { events: 1 });
        assert_eq!(collector.queued_len().await, 0);
    }

    #[tokio::test]
    async fn events_are_dropped_after_max_attempts() {
        let writer = Arc::new(TestEventWriter::failing(usize::MAX));
        let config = CollectorConfig::default().with_max_flush_attempts(2);
        let collector = collector_with(writer, Arc::new(ManualClock::default()), config);
        collector.set_consent(true).await;
        collector.track_event(track(1, EventKind::Interaction)).await;

        assert_eq!(
            collector.flush().await,
            FlushOutcome::Requeued { requeued: 1, dropped: 0 }
        );
        assert_eq!(
            collector.flush().await,
            FlushOutcome::Requeued { requeued: 0, dropped: 1 }
        );
        assert_eq!(collector.queued_len().await, 0);
    }

    #[tokio::test]
    async fn revoking_consent_clears_queue_and_blocks_tracking() {
        let writer = Arc::new(TestEventWriter::new());
        let collector = consenting_collector(writer.clone()).await;
        collector.track_event(track(1, EventKind::Interaction)).await;
        collector.track_event(track(2, EventKind::Interaction)).await;

        collector.set_consent(false).await;
        assert_eq!(collector.queued_len().await, 0);

        assert!(!collector.track_event(track(3, EventKind::Interaction)).await);
        assert_eq!(collector.flush().await, FlushOutcome::Empty);
        assert!(writer.stored_elements().await.is_empty());

        collector.set_consent(true).await;
        assert!(collector.track_event(track(4, EventKind::Interaction)).await);
        assert_eq!(collector.queued_len().await, 1);
    }

    #[tokio::test]
    async fn consent_is_persisted_and_reloaded() {
        let store = Arc::new(TestConsentStore::holding(None));
        let writer = Arc::new(TestEventWriter::new());
        let first = AnalyticsCollector::with_config(
            writer.clone(),
            store.clone(),
            Arc::new(ManualClock::default()),
            CollectorConfig::default(),
        );
        assert!(!first.load_consent().await);
        first.set_consent(true).await;

        let second = AnalyticsCollector::with_config(
            writer,
            store,
            Arc::new(ManualClock::default()),
            CollectorConfig::default(),
        );
        assert!(second.load_consent().await);
        assert!(second.has_consent().await);
    }

    #[tokio::test]
    async fn time_tracking_measures_clock_advance() {
        let writer = Arc::new(TestEventWriter::new());
        let clock = Arc::new(ManualClock::default());
        let collector = collector_with(writer, clock.clone(), CollectorConfig::default());

        collector.start_time_tracking(ElementId::new(7), Some("phaseA")).await;
        clock.advance_secs(12);
        assert_eq!(collector.stop_time_tracking(ElementId::new(7), Some("phaseA")).await, 12);
        assert_eq!(collector.stop_time_tracking(ElementId::new(7), Some("phaseA")).await, 0);
    }

    #[tokio::test]
    async fn critical_event_triggers_flush_in_run_loop() {
        let writer = Arc::new(TestEventWriter::new());
        let config = CollectorConfig::default().with_flush_interval(Duration::from_secs(3600));
        let collector = Arc::new(collector_with(writer.clone(), Arc::new(ManualClock::default()), config));
        collector.set_consent(true).await;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let runner = {
            let collector = collector.clone();
            tokio::spawn(async move { collector.run(shutdown_rx).await })
        };

        collector.track_event(track(1, EventKind::Interaction)).await;
        collector.track_event(track(2, EventKind::ElementCompleted)).await;

        let flushed = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if writer.stored_elements().await.len() == 2 {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;
        assert!(flushed.is_ok(), "critical event did not trigger a flush");

        shutdown_tx.send(true).unwrap();
        runner.await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_performs_final_flush() {
        let writer = Arc::new(TestEventWriter::new());
        let config = CollectorConfig::default().with_flush_interval(Duration::from_secs(3600));
        let collector = Arc::new(collector_with(writer.clone(), Arc::new(ManualClock::default()), config));
        collector.set_consent(true).await;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let runner = {
            let collector = collector.clone();
            tokio::spawn(async move { collector.run(shutdown_rx).await })
        };

        collector.track_event(track(5, EventKind::Interaction)).await;
        shutdown_tx.send(true).unwrap();
        runner.await.unwrap();

        assert_eq!(writer.stored_elements().await, vec![5]);
    }
}
