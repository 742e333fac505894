//! Lesson-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ElementId, ErrorCode, LessonId};

use super::ElementType;

/// An interactive element's configuration could not be turned into its
/// typed payload.
///
/// Carried on the element rather than failing the lesson, so the client can
/// render an error boundary for that element alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{element_type} configuration is malformed: {reason}")]
    Malformed {
        element_type: ElementType,
        reason: String,
    },

    #[error("{element_type} configuration is invalid: {reason}")]
    Invalid {
        element_type: ElementType,
        reason: String,
    },
}

impl ConfigurationError {
    pub fn malformed(element_type: ElementType, reason: impl Into<String>) -> Self {
        ConfigurationError::Malformed {
            element_type,
            reason: reason.into(),
        }
    }

    pub fn invalid(element_type: ElementType, reason: impl Into<String>) -> Self {
        ConfigurationError::Invalid {
            element_type,
            reason: reason.into(),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            ConfigurationError::Malformed { element_type, .. }
            | ConfigurationError::Invalid { element_type, .. } => *element_type,
        }
    }
}

/// Errors from lesson handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LessonError {
    #[error("Interactive element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Element {element_id} does not belong to lesson {lesson_id}")]
    ElementNotInLesson {
        element_id: ElementId,
        lesson_id: LessonId,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl LessonError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LessonError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LessonError::ElementNotFound(_) | LessonError::ElementNotInLesson { .. } => {
                ErrorCode::ElementNotFound
            }
            LessonError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            LessonError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for LessonError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => LessonError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => LessonError::Infrastructure(err.to_string()),
        }
    }
}
