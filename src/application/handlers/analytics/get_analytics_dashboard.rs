//! GetAnalyticsDashboardHandler - Query handler for the engagement dashboard.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::analytics::{DashboardError, DashboardSummary};
use crate::domain::foundation::{Clock, LessonId, Timestamp};
use crate::ports::AnalyticsEventReader;

/// Longest window the dashboard will aggregate.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Window used when the caller does not choose one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone)]
pub struct GetAnalyticsDashboardQuery {
    pub days: u32,
    pub lesson_id: Option<LessonId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsDashboard {
    pub from: Timestamp,
    pub to: Timestamp,
    pub lesson_id: Option<LessonId>,
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

pub struct GetAnalyticsDashboardHandler {
    events: Arc<dyn AnalyticsEventReader>,
    clock: Arc<dyn Clock>,
}

impl GetAnalyticsDashboardHandler {
    pub fn new(events: Arc<dyn AnalyticsEventReader>, clock: Arc<dyn Clock>) -> Self {
        Self { events, clock }
    }

    pub async fn handle(
        &self,
        query: GetAnalyticsDashboardQuery,
    ) -> Result<AnalyticsDashboard, DashboardError> {
        if query.days == 0 || query.days > MAX_WINDOW_DAYS {
            return Err(DashboardError::InvalidInput(format!(
                "days must be between 1 and {}, got {}",
                MAX_WINDOW_DAYS, query.days
            )));
        }

        let to = self.clock.now();
        let from = to.minus_days(i64::from(query.days));
        let events = self.events.events_between(from, to, query.lesson_id).await?;

        Ok(AnalyticsDashboard {
            from,
            to,
            lesson_id: query.lesson_id,
            summary: DashboardSummary::build(&events),
        })
    }
}
