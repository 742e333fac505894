//! HTTP handlers for lesson endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::parse_id;
use crate::adapters::http::{ErrorResponse, LearnerId};
use crate::application::handlers::{
    CompleteElementCommand, CompleteElementHandler, DeactivateElementTypesCommand,
    DeactivateElementTypesHandler, GetLessonProgressHandler, GetLessonProgressQuery,
    GetLessonSequenceHandler, GetLessonSequenceQuery, PlaceItemCommand, PlaceItemHandler,
};
use crate::domain::foundation::{ElementId, LessonId};
use crate::domain::lesson::LessonError;

use super::dto::{
    CompleteElementRequest, CompleteElementResponse, DeactivateElementTypesRequest,
    DeactivateElementTypesResponse, LessonSequenceResponse, PlaceItemRequest, PlaceItemResponse,
    SequenceQuery,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LessonHandlers {
    sequence_handler: Arc<GetLessonSequenceHandler>,
    progress_handler: Arc<GetLessonProgressHandler>,
    complete_handler: Arc<CompleteElementHandler>,
    place_handler: Arc<PlaceItemHandler>,
    deactivate_handler: Arc<DeactivateElementTypesHandler>,
}

impl LessonHandlers {
    pub fn new(
        sequence_handler: Arc<GetLessonSequenceHandler>,
        progress_handler: Arc<GetLessonProgressHandler>,
        complete_handler: Arc<CompleteElementHandler>,
        place_handler: Arc<PlaceItemHandler>,
        deactivate_handler: Arc<DeactivateElementTypesHandler>,
    ) -> Self {
        Self {
            sequence_handler,
            progress_handler,
            complete_handler,
            place_handler,
            deactivate_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/lessons/:lesson_id/sequence - Ordered lesson items
pub async fn get_sequence(
    State(handlers): State<LessonHandlers>,
    Path(lesson_id): Path<String>,
    Query(params): Query<SequenceQuery>,
) -> Response {
    let lesson_id = match parse_id::<LessonId>(&lesson_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetLessonSequenceQuery {
        lesson_id,
        include_admin_tools: params.include_admin_tools,
    };

    match handlers.sequence_handler.handle(query).await {
        Ok(sequence) => {
            let response = LessonSequenceResponse::new(lesson_id, sequence);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_lesson_error(e),
    }
}

/// GET /api/lessons/:lesson_id/progress - Learner's completion of a lesson
pub async fn get_progress(
    State(handlers): State<LessonHandlers>,
    LearnerId(user_id): LearnerId,
    Path(lesson_id): Path<String>,
) -> Response {
    let lesson_id = match parse_id::<LessonId>(&lesson_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetLessonProgressQuery { lesson_id, user_id };

    match handlers.progress_handler.handle(query).await {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(e) => handle_lesson_error(e),
    }
}

/// POST /api/lessons/:lesson_id/elements/:element_id/complete - Finish an element
pub async fn complete_element(
    State(handlers): State<LessonHandlers>,
    LearnerId(user_id): LearnerId,
    Path((lesson_id, element_id)): Path<(String, String)>,
    Json(req): Json<CompleteElementRequest>,
) -> Response {
    let lesson_id = match parse_id::<LessonId>(&lesson_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let element_id = match parse_id::<ElementId>(&element_id, "element") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CompleteElementCommand {
        lesson_id,
        element_id,
        user_id,
        submission: req.submission,
        payload: req.payload,
    };

    match handlers.complete_handler.handle(cmd).await {
        Ok(result) => {
            let response: CompleteElementResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_lesson_error(e),
    }
}

/// POST /api/lessons/:lesson_id/placement - Slot an item after a neighbour
pub async fn place_item(
    State(handlers): State<LessonHandlers>,
    Path(lesson_id): Path<String>,
    Json(req): Json<PlaceItemRequest>,
) -> Response {
    let lesson_id = match parse_id::<LessonId>(&lesson_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = PlaceItemCommand {
        lesson_id,
        item: req.item,
        after: req.after,
    };

    match handlers.place_handler.handle(cmd).await {
        Ok(result) => {
            let response: PlaceItemResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_lesson_error(e),
    }
}

/// POST /api/admin/elements/deactivate - Hide element kinds from lessons
pub async fn deactivate_element_types(
    State(handlers): State<LessonHandlers>,
    Json(req): Json<DeactivateElementTypesRequest>,
) -> Response {
    let cmd = DeactivateElementTypesCommand {
        lesson_ids: req.lesson_ids,
        element_types: req.element_types,
    };

    match handlers.deactivate_handler.handle(cmd).await {
        Ok(result) => {
            let response: DeactivateElementTypesResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_lesson_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_lesson_error(error: LessonError) -> Response {
    let code = error.code();
    match error {
        LessonError::ElementNotFound(id) => ErrorResponse::not_found("Element", &id.to_string())
            .with_code(code)
            .into_response_with(StatusCode::NOT_FOUND),
        LessonError::ElementNotInLesson { .. } => ErrorResponse::not_found("Element", "in lesson")
            .with_code(code)
            .into_response_with(StatusCode::NOT_FOUND),
        LessonError::ValidationFailed { field, message } => ErrorResponse::bad_request(format!(
            "Validation failed for {}: {}",
            field, message
        ))
        .with_code(code)
        .into_response_with(StatusCode::BAD_REQUEST),
        LessonError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Lesson request failed");
            ErrorResponse::internal("Internal server error")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_error_not_found_maps_to_404() {
        let response = handle_lesson_error(LessonError::ElementNotFound(ElementId::new(9)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn lesson_error_validation_failed_maps_to_400() {
        let response = handle_lesson_error(LessonError::validation("lesson_ids", "empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lesson_error_infrastructure_maps_to_500() {
        let response = handle_lesson_error(LessonError::Infrastructure("db down".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
