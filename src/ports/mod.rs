//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Lesson Ports
//!
//! - `LessonContentReader` - Content blocks and interactive elements
//! - `LessonContentWriter` - Ordering updates and element deactivation
//! - `ElementProgressRepository` - Per-learner completion
//!
//! ## Analytics Ports
//!
//! - `AnalyticsEventWriter` - Batch persistence of telemetry
//! - `AnalyticsEventReader` - Event log queries for dashboards
//! - `VariantRepository` - A/B test variants
//! - `ConsentStore` - Persisted consent flag

mod analytics_event_reader;
mod analytics_event_writer;
mod consent_store;
mod element_progress_repository;
mod lesson_content_reader;
mod lesson_content_writer;
mod variant_repository;

pub use analytics_event_reader::AnalyticsEventReader;
pub use analytics_event_writer::AnalyticsEventWriter;
pub use consent_store::ConsentStore;
pub use element_progress_repository::ElementProgressRepository;
pub use lesson_content_reader::LessonContentReader;
pub use lesson_content_writer::LessonContentWriter;
pub use variant_repository::VariantRepository;

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the ports are object-safe
    #[allow(dead_code)]
    fn assert_object_safe(
        _: &dyn LessonContentReader,
        _: &dyn LessonContentWriter,
        _: &dyn ElementProgressRepository,
        _: &dyn AnalyticsEventWriter,
        _: &dyn AnalyticsEventReader,
        _: &dyn VariantRepository,
        _: &dyn ConsentStore,
    ) {
    }
}
