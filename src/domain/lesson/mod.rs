//! Lesson module - content blocks, interactive elements and their ordering.
//!
//! # Module Organization
//!
//! - `element_type` - Closed catalogue of interactive element kinds
//! - `configuration` - Typed configuration payloads, decoded at the boundary
//! - `sequence` - Merging content and elements into presentation order
//! - `placement` - Sparse `order_index` allocation for authoring
//! - `progress` - Per-learner completion
//! - `scoring` - Grading for quiz-style elements

mod configuration;
mod content_block;
mod element_type;
mod errors;
mod interactive_element;
mod placement;
mod progress;
mod scoring;
mod sequence;

pub use configuration::{
    AdminToolConfig, AiToolConfig, CalloutBoxConfig, ChatConfig, ElementConfiguration,
    KnowledgeCheckConfig, ScenarioConfig, ScenariosConfig, SequenceSorterConfig, TrackerConfig,
    DEFAULT_MIN_EXCHANGES, MIN_OPTIONS, MIN_SORTER_ITEMS,
};
pub use content_block::ContentBlock;
pub use element_type::{ConfigurationShape, ElementType, UnknownElementType};
pub use errors::{ConfigurationError, LessonError};
pub use interactive_element::InteractiveElement;
pub use placement::{index_after, index_between, renumber, ORDER_STEP};
pub use progress::{ElementProgress, LessonProgress};
pub use scoring::QuizScore;
pub use sequence::{ContentSequencer, IndexCollision, ItemKind, ItemRef, LessonSequence, SequencedItem};
