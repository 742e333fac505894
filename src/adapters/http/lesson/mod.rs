//! HTTP adapter for lesson endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompleteElementRequest, CompleteElementResponse, DeactivateElementTypesRequest,
    DeactivateElementTypesResponse, LessonSequenceResponse, PlaceItemRequest, PlaceItemResponse,
    SequenceItemResponse, SequenceQuery,
};
pub use handlers::LessonHandlers;
pub use routes::lesson_routes;
