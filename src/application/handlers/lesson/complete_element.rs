//! CompleteElementHandler - Command handler for finishing an interactive element.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::application::analytics::AnalyticsCollector;
use crate::domain::analytics::{EventKind, TrackEvent};
use crate::domain::foundation::{Clock, ElementId, LessonId, UserId};
use crate::domain::lesson::{
    ConfigurationError, ElementConfiguration, ElementProgress, LessonError, QuizScore,
};
use crate::ports::{ElementProgressRepository, LessonContentReader};

/// Learner answers submitted with a completion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Submission {
    /// Option picked in a knowledge check.
    Choice(usize),
    /// One option per scenario.
    Choices(Vec<usize>),
    /// Items in the order the learner arranged them.
    Order(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct CompleteElementCommand {
    pub lesson_id: LessonId,
    pub element_id: ElementId,
    pub user_id: UserId,
    pub submission: Option<Submission>,
    /// Extra data attached to the `element_completed` event.
    pub payload: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct CompleteElementResult {
    pub progress: ElementProgress,
    pub score: Option<QuizScore>,
}

pub struct CompleteElementHandler {
    reader: Arc<dyn LessonContentReader>,
    progress: Arc<dyn ElementProgressRepository>,
    collector: Arc<AnalyticsCollector>,
    clock: Arc<dyn Clock>,
}

impl CompleteElementHandler {
    pub fn new(
        reader: Arc<dyn LessonContentReader>,
        progress: Arc<dyn ElementProgressRepository>,
        collector: Arc<AnalyticsCollector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            progress,
            collector,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteElementCommand,
    ) -> Result<CompleteElementResult, LessonError> {
        let element = self
            .reader
            .element(cmd.element_id)
            .await?
            .ok_or(LessonError::ElementNotFound(cmd.element_id))?;

        if element.lesson_id != cmd.lesson_id {
            return Err(LessonError::ElementNotInLesson {
                element_id: cmd.element_id,
                lesson_id: cmd.lesson_id,
            });
        }

        let score = match &cmd.submission {
            Some(submission) => Some(grade(&element.configuration, submission)?),
            None => None,
        };

        let progress = ElementProgress::completed(
            cmd.user_id.clone(),
            cmd.lesson_id,
            cmd.element_id,
            self.clock.now(),
        );
        self.progress.upsert(&progress).await?;

        let mut event = TrackEvent::new(
            element.id,
            element.element_type,
            cmd.lesson_id,
            cmd.user_id,
            EventKind::ElementCompleted,
        );
        if let Some(payload) = event_payload(cmd.payload, score) {
            event = event.with_payload(payload);
        }
        self.collector.track_event(event).await;

        Ok(CompleteElementResult { progress, score })
    }
}

fn grade(
    configuration: &Result<ElementConfiguration, ConfigurationError>,
    submission: &Submission,
) -> Result<QuizScore, LessonError> {
    let configuration = configuration
        .as_ref()
        .map_err(|e| LessonError::validation("submission", format!("element cannot be graded: {}", e)))?;

    match (configuration, submission) {
        (ElementConfiguration::KnowledgeCheck(kc), Submission::Choice(choice)) => {
            Ok(QuizScore::new(usize::from(kc.grade(*choice)), 1))
        }
        (ElementConfiguration::Scenarios(s), Submission::Choices(choices)) => Ok(s.score(choices)),
        (ElementConfiguration::SequenceSorter(s), Submission::Order(order)) => Ok(s.score(order)),
        _ => Err(LessonError::validation(
            "submission",
            "submission does not match the element's exercise type",
        )),
    }
}

fn event_payload(payload: Option<Value>, score: Option<QuizScore>) -> Option<Value> {
    let Some(score) = score else {
        return payload;
    };
    let mut map = match payload {
        Some(Value::Object(map)) => map,
        Some(other) => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
        None => Map::new(),
    };
    map.insert(
        "score".to_string(),
        json!({
            "correct": score.correct,
            "total": score.total,
            "percentage": score.percentage.value(),
        }),
    );
    Some(Value::Object(map))
}
