//! Analytics services.

mod collector;

pub use collector::{AnalyticsCollector, CollectorConfig, FlushOutcome};
