//! Lesson command and query handlers.

mod complete_element;
mod deactivate_element_types;
mod get_lesson_progress;
mod get_lesson_sequence;
mod place_item;

pub use complete_element::{
    CompleteElementCommand, CompleteElementHandler, CompleteElementResult, Submission,
};
pub use deactivate_element_types::{
    DeactivateElementTypesCommand, DeactivateElementTypesHandler, DeactivateElementTypesResult,
};
pub use get_lesson_progress::{GetLessonProgressHandler, GetLessonProgressQuery};
pub use get_lesson_sequence::{GetLessonSequenceHandler, GetLessonSequenceQuery};
pub use place_item::{PlaceItemCommand, PlaceItemHandler, PlaceItemResult};
