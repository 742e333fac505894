//! Interactive elements embedded in lessons.

use serde_json::Value;

use crate::domain::foundation::{ElementId, LessonId};

use super::{ConfigurationError, ElementConfiguration, ElementType};

/// An exercise, generator, chat or tool placed in a lesson.
///
/// `configuration` holds the decode result rather than a bare payload so a
/// broken row still takes its place in the lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveElement {
    pub id: ElementId,
    pub lesson_id: LessonId,
    pub element_type: ElementType,
    pub title: String,
    pub content: Option<String>,
    pub configuration: Result<ElementConfiguration, ConfigurationError>,
    pub order_index: i32,
    pub is_active: bool,
}

impl InteractiveElement {
    /// Builds an element, decoding its stored configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: ElementId,
        lesson_id: LessonId,
        element_type: ElementType,
        title: impl Into<String>,
        content: Option<String>,
        raw_configuration: Option<&Value>,
        order_index: i32,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            lesson_id,
            element_type,
            title: title.into(),
            content,
            configuration: ElementConfiguration::parse(element_type, raw_configuration),
            order_index,
            is_active,
        }
    }

    /// Returns true when the configuration decoded cleanly.
    pub fn is_renderable(&self) -> bool {
        self.configuration.is_ok()
    }
}
