//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analytics;
pub mod experiment;
pub mod lesson;

pub use analytics::{AnalyticsDashboard, GetAnalyticsDashboardHandler, GetAnalyticsDashboardQuery};
pub use experiment::{
    AssignVariantHandler, AssignVariantQuery, CreateVariantHandler, GetVariantResultsHandler,
    GetVariantResultsQuery,
};
pub use lesson::{
    CompleteElementCommand, CompleteElementHandler, CompleteElementResult,
    DeactivateElementTypesCommand, DeactivateElementTypesHandler, DeactivateElementTypesResult,
    GetLessonProgressHandler, GetLessonProgressQuery, GetLessonSequenceHandler,
    GetLessonSequenceQuery, PlaceItemCommand, PlaceItemHandler, PlaceItemResult, Submission,
};
