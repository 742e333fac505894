//! HTTP handlers for experiment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::parse_id;
use crate::adapters::http::ErrorResponse;
use crate::application::handlers::{
    AssignVariantHandler, AssignVariantQuery, CreateVariantHandler, GetVariantResultsHandler,
    GetVariantResultsQuery,
};
use crate::domain::analytics::ExperimentError;
use crate::domain::foundation::ElementId;

use super::dto::{CreateVariantRequest, VariantResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ExperimentHandlers {
    create_handler: Arc<CreateVariantHandler>,
    assign_handler: Arc<AssignVariantHandler>,
    results_handler: Arc<GetVariantResultsHandler>,
}

impl ExperimentHandlers {
    pub fn new(
        create_handler: Arc<CreateVariantHandler>,
        assign_handler: Arc<AssignVariantHandler>,
        results_handler: Arc<GetVariantResultsHandler>,
    ) -> Self {
        Self {
            create_handler,
            assign_handler,
            results_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/elements/:element_id/variants - Add a variant
pub async fn create_variant(
    State(handlers): State<ExperimentHandlers>,
    Path(element_id): Path<String>,
    Json(req): Json<CreateVariantRequest>,
) -> Response {
    let element_id = match parse_id::<ElementId>(&element_id, "element") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .create_handler
        .handle(req.into_new_variant(element_id))
        .await
    {
        Ok(variant) => {
            let response: VariantResponse = variant.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_experiment_error(e),
    }
}

/// GET /api/elements/:element_id/variant - Weighted pick among active variants
pub async fn assign_variant(
    State(handlers): State<ExperimentHandlers>,
    Path(element_id): Path<String>,
) -> Response {
    let element_id = match parse_id::<ElementId>(&element_id, "element") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .assign_handler
        .handle(AssignVariantQuery { element_id })
        .await
    {
        Ok(variant) => {
            let response: VariantResponse = variant.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_experiment_error(e),
    }
}

/// GET /api/elements/:element_id/variants/results - Per-variant outcomes
pub async fn get_variant_results(
    State(handlers): State<ExperimentHandlers>,
    Path(element_id): Path<String>,
) -> Response {
    let element_id = match parse_id::<ElementId>(&element_id, "element") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .results_handler
        .handle(GetVariantResultsQuery { element_id })
        .await
    {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => handle_experiment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_experiment_error(error: ExperimentError) -> Response {
    let code = error.code();
    match error {
        ExperimentError::ElementNotFound(id) => ErrorResponse::not_found("Element", &id.to_string())
            .with_code(code)
            .into_response_with(StatusCode::NOT_FOUND),
        ExperimentError::NoActiveVariants(id) => ErrorResponse::not_found("Active variant for element", &id.to_string())
            .with_code(code)
            .into_response_with(StatusCode::NOT_FOUND),
        ExperimentError::ValidationFailed { field, message } => ErrorResponse::bad_request(
            format!("Validation failed for {}: {}", field, message),
        )
        .with_code(code)
        .into_response_with(StatusCode::BAD_REQUEST),
        ExperimentError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Experiment request failed");
            ErrorResponse::internal("Internal server error")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_active_variants_maps_to_404() {
        let response = handle_experiment_error(ExperimentError::NoActiveVariants(ElementId::new(1)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failed_maps_to_400() {
        let response = handle_experiment_error(ExperimentError::validation("weight", "negative"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
