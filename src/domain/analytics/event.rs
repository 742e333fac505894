//! Interaction telemetry events.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::{AnalyticsSessionId, ElementId, LessonId, Timestamp, UserId};
use crate::domain::lesson::ElementType;

/// Payload key carrying seconds spent on an element.
pub const TIME_SPENT_KEY: &str = "time_spent";

/// Payload key carrying the experiment variant the learner saw.
pub const VARIANT_ID_KEY: &str = "variant_id";

/// Tag that does not name any known event kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown analytics event type: '{0}'")]
pub struct UnknownEventKind(pub String);

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ElementLoaded,
    ElementStarted,
    ElementCompleted,
    ElementAbandoned,
    PhaseStarted,
    PhaseCompleted,
    Interaction,
    InputSubmitted,
    OptionSelected,
    Retry,
    Error,
    ValidationFailed,
    TimeUpdate,
    HelpRequested,
    HintViewed,
}

impl EventKind {
    pub const ALL: [EventKind; 15] = [
        EventKind::ElementLoaded,
        EventKind::ElementStarted,
        EventKind::ElementCompleted,
        EventKind::ElementAbandoned,
        EventKind::PhaseStarted,
        EventKind::PhaseCompleted,
        EventKind::Interaction,
        EventKind::InputSubmitted,
        EventKind::OptionSelected,
        EventKind::Retry,
        EventKind::Error,
        EventKind::ValidationFailed,
        EventKind::TimeUpdate,
        EventKind::HelpRequested,
        EventKind::HintViewed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ElementLoaded => "element_loaded",
            EventKind::ElementStarted => "element_started",
            EventKind::ElementCompleted => "element_completed",
            EventKind::ElementAbandoned => "element_abandoned",
            EventKind::PhaseStarted => "phase_started",
            EventKind::PhaseCompleted => "phase_completed",
            EventKind::Interaction => "interaction",
            EventKind::InputSubmitted => "input_submitted",
            EventKind::OptionSelected => "option_selected",
            EventKind::Retry => "retry",
            EventKind::Error => "error",
            EventKind::ValidationFailed => "validation_failed",
            EventKind::TimeUpdate => "time_update",
            EventKind::HelpRequested => "help_requested",
            EventKind::HintViewed => "hint_viewed",
        }
    }

    /// Critical events are flushed immediately instead of on the next tick.
    pub fn is_critical(&self) -> bool {
        matches!(self, EventKind::ElementCompleted | EventKind::Error)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// Caller-supplied part of an event, before it is stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEvent {
    pub element_id: ElementId,
    pub element_type: ElementType,
    pub lesson_id: LessonId,
    pub user_id: UserId,
    pub kind: EventKind,
    pub payload: Option<Value>,
}

impl TrackEvent {
    pub fn new(
        element_id: ElementId,
        element_type: ElementType,
        lesson_id: LessonId,
        user_id: UserId,
        kind: EventKind,
    ) -> Self {
        Self {
            element_id,
            element_type,
            lesson_id,
            user_id,
            kind,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Stamps the event with time and session.
    pub fn stamp(self, timestamp: Timestamp, session_id: AnalyticsSessionId) -> AnalyticsEvent {
        AnalyticsEvent {
            element_id: self.element_id,
            element_type: self.element_type,
            lesson_id: self.lesson_id,
            user_id: self.user_id,
            kind: self.kind,
            payload: self.payload,
            timestamp,
            session_id,
        }
    }
}

/// A recorded interaction, as persisted in the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub element_id: ElementId,
    pub element_type: ElementType,
    pub lesson_id: LessonId,
    pub user_id: UserId,
    pub kind: EventKind,
    pub payload: Option<Value>,
    pub timestamp: Timestamp,
    pub session_id: AnalyticsSessionId,
}

impl AnalyticsEvent {
    /// Seconds spent, when the payload reports them.
    pub fn time_spent_secs(&self) -> Option<f64> {
        self.payload
            .as_ref()?
            .get(TIME_SPENT_KEY)?
            .as_f64()
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
    }

    /// Variant the learner was assigned, when the payload names one.
    pub fn variant_id(&self) -> Option<&str> {
        self.payload.as_ref()?.get(VARIANT_ID_KEY)?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(payload: Option<Value>) -> AnalyticsEvent {
        TrackEvent {
            element_id: ElementId::new(1),
            element_type: ElementType::KnowledgeCheck,
            lesson_id: LessonId::new(2),
            user_id: UserId::new("learner-1").unwrap(),
            kind: EventKind::TimeUpdate,
            payload,
        }
        .stamp(Timestamp::now(), AnalyticsSessionId::new())
    }

    #[test]
    fn wire_tags_match_serde() {
        for kind in EventKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn only_completion_and_error_are_critical() {
        let critical: Vec<_> = EventKind::ALL.iter().filter(|k| k.is_critical()).collect();
        assert_eq!(critical, vec![&EventKind::ElementCompleted, &EventKind::Error]);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("element_exploded".parse::<EventKind>().is_err());
    }

    #[test]
    fn time_spent_reads_payload() {
        assert_eq!(sample(Some(json!({ "time_spent": 42 }))).time_spent_secs(), Some(42.0));
        assert_eq!(sample(Some(json!({ "time_spent": -1 }))).time_spent_secs(), None);
        assert_eq!(sample(None).time_spent_secs(), None);
    }

    #[test]
    fn variant_id_reads_payload() {
        let event = sample(Some(json!({ "variant_id": "abc" })));
        assert_eq!(event.variant_id(), Some("abc"));
    }
}
