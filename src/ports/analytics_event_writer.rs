//! AnalyticsEventWriter port - Append-only persistence of telemetry.

use async_trait::async_trait;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::DomainError;

/// Persists batches of analytics events.
///
/// Implementations must ensure:
/// - A batch is stored entirely or not at all
/// - Events are stored in slice order
#[async_trait]
pub trait AnalyticsEventWriter: Send + Sync {
    async fn insert_batch(&self, events: &[AnalyticsEvent]) -> Result<(), DomainError>;
}
