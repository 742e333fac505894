//! HTTP adapter for analytics endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ConsentRequest, ConsentResponse, DashboardParams, TrackEventRequest, TrackEventResponse};
pub use handlers::AnalyticsHandlers;
pub use routes::analytics_routes;
