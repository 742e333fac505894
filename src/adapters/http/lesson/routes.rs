//! HTTP routes for lesson endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_element, deactivate_element_types, get_progress, get_sequence, place_item,
    LessonHandlers,
};

/// Creates the lesson router with all endpoints.
pub fn lesson_routes(handlers: LessonHandlers) -> Router {
    Router::new()
        .route("/api/lessons/:lesson_id/sequence", get(get_sequence))
        .route("/api/lessons/:lesson_id/progress", get(get_progress))
        .route(
            "/api/lessons/:lesson_id/elements/:element_id/complete",
            post(complete_element),
        )
        .route("/api/lessons/:lesson_id/placement", post(place_item))
        .route("/api/admin/elements/deactivate", post(deactivate_element_types))
        .with_state(handlers)
}
