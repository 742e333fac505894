//! Request and response bodies for analytics endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::analytics::{EventKind, TrackEvent};
use crate::domain::foundation::{ElementId, LessonId, UserId};
use crate::domain::lesson::ElementType;

#[derive(Debug, Clone, Deserialize)]
pub struct TrackEventRequest {
    pub element_id: ElementId,
    pub element_type: String,
    pub lesson_id: LessonId,
    pub event_type: String,
    #[serde(default)]
    pub event_data: Option<Value>,
}

impl TrackEventRequest {
    /// Resolves the type tags; the error names the offending field.
    pub fn into_track_event(self, user_id: UserId) -> Result<TrackEvent, String> {
        let element_type: ElementType = self
            .element_type
            .parse()
            .map_err(|_| format!("Unknown element_type: {}", self.element_type))?;
        let kind: EventKind = self
            .event_type
            .parse()
            .map_err(|_| format!("Unknown event_type: {}", self.event_type))?;

        let event = TrackEvent::new(self.element_id, element_type, self.lesson_id, user_id, kind);
        Ok(match self.event_data {
            Some(data) => event.with_payload(data),
            None => event,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackEventResponse {
    /// False when consent is not granted and the event was dropped.
    pub queued: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsentRequest {
    pub granted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsentResponse {
    pub granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub lesson_id: Option<LessonId>,
}
