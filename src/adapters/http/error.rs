//! JSON error body shared by all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::str::FromStr;

use crate::domain::foundation::ErrorCode;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Uses a domain error code in place of the generic HTTP label.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Parses a numeric path segment, answering 400 when it is not an id.
pub(crate) fn parse_id<T: FromStr>(raw: &str, label: &str) -> Result<T, Response> {
    raw.parse::<T>().map_err(|_| {
        ErrorResponse::bad_request(format!("Invalid {} ID", label))
            .into_response_with(StatusCode::BAD_REQUEST)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn not_found_mentions_resource_and_id() {
        let error = ErrorResponse::not_found("Element", "42");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("Element"));
        assert!(error.message.contains("42"));
    }

    #[test]
    fn with_code_overrides_label() {
        let error = ErrorResponse::bad_request("none").with_code(ErrorCode::NoActiveVariants);
        assert_eq!(error.code, "NO_ACTIVE_VARIANTS");
    }

    #[test]
    fn non_numeric_id_is_a_bad_request() {
        let response = parse_id::<i64>("abc", "lesson").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert!(json.get("details").is_none());
    }
}
