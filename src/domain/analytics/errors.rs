//! Error types for experiment and dashboard handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ElementId, ErrorCode, ValidationError};

/// Errors from experiment handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    #[error("Interactive element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Element {0} has no active variants")]
    NoActiveVariants(ElementId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ExperimentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ExperimentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExperimentError::ElementNotFound(_) => ErrorCode::ElementNotFound,
            ExperimentError::NoActiveVariants(_) => ErrorCode::NoActiveVariants,
            ExperimentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ExperimentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for ExperimentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ExperimentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ExperimentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ExperimentError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        ExperimentError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

/// Errors from analytics read-back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DashboardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::InvalidInput(_) => ErrorCode::ValidationFailed,
            DashboardError::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for DashboardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => DashboardError::InvalidInput(err.message),
            _ => DashboardError::Database(err.to_string()),
        }
    }
}
