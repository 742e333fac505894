//! HTTP adapter for A/B experiment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateVariantRequest, VariantResponse};
pub use handlers::ExperimentHandlers;
pub use routes::experiment_routes;
