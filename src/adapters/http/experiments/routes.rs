//! HTTP routes for experiment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{assign_variant, create_variant, get_variant_results, ExperimentHandlers};

/// Creates the experiment router with all endpoints.
pub fn experiment_routes(handlers: ExperimentHandlers) -> Router {
    Router::new()
        .route("/api/elements/:element_id/variants", post(create_variant))
        .route("/api/elements/:element_id/variant", get(assign_variant))
        .route(
            "/api/elements/:element_id/variants/results",
            get(get_variant_results),
        )
        .with_state(handlers)
}
