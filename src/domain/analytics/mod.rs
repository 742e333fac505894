//! Analytics module - interaction telemetry, experiments and read-back.
//!
//! # Module Organization
//!
//! - `event` - Event kinds and stamped events
//! - `queue` - Pending events awaiting a flush
//! - `time_tracker` - Elapsed time per element and phase
//! - `variant` - A/B variants and weighted selection
//! - `summary` - Dashboard metrics, trends and experiment results

mod errors;
mod event;
mod queue;
mod summary;
mod time_tracker;
mod variant;

pub use errors::{DashboardError, ExperimentError};
pub use event::{AnalyticsEvent, EventKind, TrackEvent, UnknownEventKind, TIME_SPENT_KEY, VARIANT_ID_KEY};
pub use queue::{EventQueue, QueuedEvent};
pub use summary::{
    engagement_trends, rank_elements, variant_results, DashboardSummary, ElementMetrics,
    ElementRankings, EngagementTrend, VariantResults, NEEDS_IMPROVEMENT_BELOW, RANKING_SIZE,
};
pub use time_tracker::TimeTracker;
pub use variant::{select_variant, AbTestVariant, NewVariant};
