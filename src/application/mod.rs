//! Application layer - Commands, Queries, Handlers and the analytics collector.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod analytics;
pub mod handlers;

pub use analytics::{AnalyticsCollector, CollectorConfig, FlushOutcome};
