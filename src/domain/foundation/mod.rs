//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the clock abstraction and error
//! types that form the vocabulary of the lesson and analytics domains.

mod clock;
mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnalyticsSessionId, ContentBlockId, ElementId, LessonId, UserId, VariantId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
