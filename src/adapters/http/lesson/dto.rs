//! Request and response bodies for lesson endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::{
    CompleteElementResult, DeactivateElementTypesResult, PlaceItemResult, Submission,
};
use crate::domain::foundation::{LessonId, Percentage};
use crate::domain::lesson::{
    ConfigurationError, ElementConfiguration, ElementType, IndexCollision, ItemRef, LessonSequence,
    QuizScore, SequencedItem,
};

// ════════════════════════════════════════════════════════════════════════════
// Sequence
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SequenceQuery {
    #[serde(default)]
    pub include_admin_tools: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonSequenceResponse {
    pub lesson_id: LessonId,
    pub items: Vec<SequenceItemResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub index_collisions: Vec<IndexCollisionResponse>,
}

impl LessonSequenceResponse {
    pub fn new(lesson_id: LessonId, sequence: LessonSequence) -> Self {
        let index_collisions = sequence
            .duplicate_indices()
            .into_iter()
            .map(IndexCollisionResponse::from)
            .collect();
        Self {
            lesson_id,
            items: sequence.into_iter().map(SequenceItemResponse::from).collect(),
            index_collisions,
        }
    }
}

/// One rendered lesson item, tagged by origin.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceItemResponse {
    Content {
        id: i64,
        order_index: i32,
        title: String,
        content: String,
    },
    Interactive {
        id: i64,
        order_index: i32,
        element_type: ElementType,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        configuration: Option<ElementConfiguration>,
        #[serde(skip_serializing_if = "Option::is_none")]
        invalid_configuration: Option<InvalidConfigurationResponse>,
    },
}

impl From<SequencedItem> for SequenceItemResponse {
    fn from(item: SequencedItem) -> Self {
        match item {
            SequencedItem::Content(block) => SequenceItemResponse::Content {
                id: block.id.value(),
                order_index: block.order_index,
                title: block.title,
                content: block.content,
            },
            SequencedItem::Interactive(element) => {
                let (configuration, invalid_configuration) = match element.configuration {
                    Ok(configuration) => (Some(configuration), None),
                    Err(error) => (None, Some(InvalidConfigurationResponse::from(error))),
                };
                SequenceItemResponse::Interactive {
                    id: element.id.value(),
                    order_index: element.order_index,
                    element_type: element.element_type,
                    title: element.title,
                    content: element.content,
                    configuration,
                    invalid_configuration,
                }
            }
        }
    }
}

/// Error payload rendered in place of an unusable configuration.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidConfigurationResponse {
    pub error: &'static str,
    pub element_type: ElementType,
    pub message: String,
}

impl From<ConfigurationError> for InvalidConfigurationResponse {
    fn from(error: ConfigurationError) -> Self {
        let kind = match &error {
            ConfigurationError::Malformed { .. } => "malformed",
            ConfigurationError::Invalid { .. } => "invalid",
        };
        Self {
            error: kind,
            element_type: error.element_type(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexCollisionResponse {
    pub order_index: i32,
    pub items: Vec<CollidingItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollidingItem {
    pub kind: &'static str,
    pub id: i64,
}

impl From<IndexCollision> for IndexCollisionResponse {
    fn from(collision: IndexCollision) -> Self {
        Self {
            order_index: collision.order_index,
            items: collision
                .items
                .into_iter()
                .map(|(kind, id)| CollidingItem {
                    kind: kind.as_str(),
                    id,
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Completion
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteElementRequest {
    #[serde(default)]
    pub submission: Option<Submission>,
    #[serde(default)]
    pub payload: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteElementResponse {
    pub element_id: i64,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub correct: usize,
    pub total: usize,
    pub percentage: Percentage,
    pub perfect: bool,
}

impl From<QuizScore> for ScoreResponse {
    fn from(score: QuizScore) -> Self {
        Self {
            correct: score.correct,
            total: score.total,
            percentage: score.percentage,
            perfect: score.is_perfect(),
        }
    }
}

impl From<CompleteElementResult> for CompleteElementResponse {
    fn from(result: CompleteElementResult) -> Self {
        Self {
            element_id: result.progress.element_id.value(),
            completed: result.progress.completed,
            score: result.score.map(ScoreResponse::from),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Authoring
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceItemRequest {
    pub item: ItemRef,
    /// Neighbour to follow; omitted to place the item first.
    #[serde(default)]
    pub after: Option<ItemRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceItemResponse {
    pub order_index: i32,
    pub updated: usize,
    pub renumbered: bool,
}

impl From<PlaceItemResult> for PlaceItemResponse {
    fn from(result: PlaceItemResult) -> Self {
        Self {
            order_index: result.order_index,
            updated: result.updated,
            renumbered: result.renumbered,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeactivateElementTypesRequest {
    pub lesson_ids: Vec<LessonId>,
    /// Omitted to hide every authoring tool.
    #[serde(default)]
    pub element_types: Option<Vec<ElementType>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeactivateElementTypesResponse {
    pub deactivated: u64,
    pub element_types: Vec<ElementType>,
}

impl From<DeactivateElementTypesResult> for DeactivateElementTypesResponse {
    fn from(result: DeactivateElementTypesResult) -> Self {
        Self {
            deactivated: result.deactivated,
            element_types: result.element_types,
        }
    }
}
