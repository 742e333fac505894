//! HTTP routes for analytics endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_consent, get_dashboard, set_consent, track_event, AnalyticsHandlers};

/// Creates the analytics router with all endpoints.
pub fn analytics_routes(handlers: AnalyticsHandlers) -> Router {
    Router::new()
        .route("/api/analytics/events", post(track_event))
        .route("/api/analytics/consent", get(get_consent).put(set_consent))
        .route("/api/analytics/dashboard", get(get_dashboard))
        .with_state(handlers)
}
