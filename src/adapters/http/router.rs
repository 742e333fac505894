//! API router assembly.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::application::handlers::{
    AssignVariantHandler, CompleteElementHandler, CreateVariantHandler,
    DeactivateElementTypesHandler, GetAnalyticsDashboardHandler, GetLessonProgressHandler,
    GetLessonSequenceHandler, GetVariantResultsHandler, PlaceItemHandler,
};
use crate::application::AnalyticsCollector;
use crate::domain::foundation::Clock;
use crate::ports::{
    AnalyticsEventReader, ElementProgressRepository, LessonContentReader, LessonContentWriter,
    VariantRepository,
};

use super::{
    analytics_routes, experiment_routes, lesson_routes, AnalyticsHandlers, ExperimentHandlers,
    LessonHandlers,
};

/// Persistence ports the API is served from.
#[derive(Clone)]
pub struct ApiPorts {
    pub content_reader: Arc<dyn LessonContentReader>,
    pub content_writer: Arc<dyn LessonContentWriter>,
    pub progress: Arc<dyn ElementProgressRepository>,
    pub events: Arc<dyn AnalyticsEventReader>,
    pub variants: Arc<dyn VariantRepository>,
}

/// Wires every application handler onto `ports` and returns the full router.
pub fn build_api(ports: ApiPorts, collector: Arc<AnalyticsCollector>, clock: Arc<dyn Clock>) -> Router {
    let lessons = LessonHandlers::new(
        Arc::new(GetLessonSequenceHandler::new(ports.content_reader.clone())),
        Arc::new(GetLessonProgressHandler::new(
            ports.content_reader.clone(),
            ports.progress.clone(),
        )),
        Arc::new(CompleteElementHandler::new(
            ports.content_reader.clone(),
            ports.progress.clone(),
            collector.clone(),
            clock.clone(),
        )),
        Arc::new(PlaceItemHandler::new(
            ports.content_reader.clone(),
            ports.content_writer.clone(),
        )),
        Arc::new(DeactivateElementTypesHandler::new(ports.content_writer.clone())),
    );

    let analytics = AnalyticsHandlers::new(
        collector.clone(),
        Arc::new(GetAnalyticsDashboardHandler::new(ports.events.clone(), clock)),
    );

    let experiments = ExperimentHandlers::new(
        Arc::new(CreateVariantHandler::new(
            ports.content_reader.clone(),
            ports.variants.clone(),
        )),
        Arc::new(AssignVariantHandler::new(ports.variants.clone(), collector)),
        Arc::new(GetVariantResultsHandler::new(ports.variants, ports.events)),
    );

    api_router(lessons, analytics, experiments)
}

/// Merges every endpoint group and the health check.
pub fn api_router(
    lessons: LessonHandlers,
    analytics: AnalyticsHandlers,
    experiments: ExperimentHandlers,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(lesson_routes(lessons))
        .merge(analytics_routes(analytics))
        .merge(experiment_routes(experiments))
}

/// GET /health - Liveness probe
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })),
    )
}
