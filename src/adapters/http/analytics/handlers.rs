//! HTTP handlers for analytics endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{ErrorResponse, LearnerId};
use crate::application::handlers::analytics::DEFAULT_WINDOW_DAYS;
use crate::application::handlers::{GetAnalyticsDashboardHandler, GetAnalyticsDashboardQuery};
use crate::application::AnalyticsCollector;
use crate::domain::analytics::DashboardError;

use super::dto::{ConsentRequest, ConsentResponse, DashboardParams, TrackEventRequest, TrackEventResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalyticsHandlers {
    collector: Arc<AnalyticsCollector>,
    dashboard_handler: Arc<GetAnalyticsDashboardHandler>,
}

impl AnalyticsHandlers {
    pub fn new(
        collector: Arc<AnalyticsCollector>,
        dashboard_handler: Arc<GetAnalyticsDashboardHandler>,
    ) -> Self {
        Self {
            collector,
            dashboard_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analytics/events - Queue one interaction event
pub async fn track_event(
    State(handlers): State<AnalyticsHandlers>,
    LearnerId(user_id): LearnerId,
    Json(req): Json<TrackEventRequest>,
) -> Response {
    let event = match req.into_track_event(user_id) {
        Ok(event) => event,
        Err(message) => {
            return ErrorResponse::bad_request(message).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let queued = handlers.collector.track_event(event).await;
    (StatusCode::ACCEPTED, Json(TrackEventResponse { queued })).into_response()
}

/// GET /api/analytics/consent - Current consent decision
pub async fn get_consent(State(handlers): State<AnalyticsHandlers>) -> Response {
    let response = ConsentResponse {
        granted: handlers.collector.has_consent().await,
        persisted: None,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// PUT /api/analytics/consent - Grant or revoke consent
pub async fn set_consent(
    State(handlers): State<AnalyticsHandlers>,
    Json(req): Json<ConsentRequest>,
) -> Response {
    let persisted = handlers.collector.set_consent(req.granted).await;
    let response = ConsentResponse {
        granted: req.granted,
        persisted: Some(persisted),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/analytics/dashboard?days=&lesson_id= - Aggregated engagement
pub async fn get_dashboard(
    State(handlers): State<AnalyticsHandlers>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let query = GetAnalyticsDashboardQuery {
        days: params.days.unwrap_or(DEFAULT_WINDOW_DAYS),
        lesson_id: params.lesson_id,
    };

    match handlers.dashboard_handler.handle(query).await {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(e) => handle_dashboard_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_dashboard_error(error: DashboardError) -> Response {
    match error {
        DashboardError::InvalidInput(msg) => {
            ErrorResponse::bad_request(msg).into_response_with(StatusCode::BAD_REQUEST)
        }
        DashboardError::Database(msg) => {
            tracing::error!(error = %msg, "Dashboard query failed");
            ErrorResponse::internal("Failed to load analytics")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_invalid_input_maps_to_400() {
        let response = handle_dashboard_error(DashboardError::InvalidInput("days".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn dashboard_database_error_maps_to_500() {
        let response = handle_dashboard_error(DashboardError::Database("down".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
