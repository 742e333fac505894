//! Narrative content blocks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContentBlockId, LessonId};

/// A unit of instructional text shown in a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: ContentBlockId,
    pub lesson_id: LessonId,
    pub title: String,
    pub content: String,
    pub order_index: i32,
}

impl ContentBlock {
    pub fn new(
        id: ContentBlockId,
        lesson_id: LessonId,
        title: impl Into<String>,
        content: impl Into<String>,
        order_index: i32,
    ) -> Self {
        Self {
            id,
            lesson_id,
            title: title.into(),
            content: content.into(),
            order_index,
        }
    }
}
