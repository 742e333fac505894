//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes; `router`
//! assembles them into the service's API.

pub mod analytics;
pub mod experiments;
pub mod lesson;

mod error;
mod identity;
mod router;

pub use analytics::{analytics_routes, AnalyticsHandlers};
pub use error::ErrorResponse;
pub use experiments::{experiment_routes, ExperimentHandlers};
pub use identity::{LearnerId, USER_ID_HEADER};
pub use lesson::{lesson_routes, LessonHandlers};
pub use router::{api_router, build_api, ApiPorts};
