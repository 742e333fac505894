//! Learner identity extractor.
//!
//! Authentication happens upstream; requests arrive with the learner's id in
//! the `X-User-Id` header.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::foundation::UserId;

use super::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires the learner id header.
#[derive(Debug, Clone)]
pub struct LearnerId(pub UserId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityRejection {
    Missing,
    Invalid,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let message = match self {
            IdentityRejection::Missing => "Missing X-User-Id header",
            IdentityRejection::Invalid => "X-User-Id header must be a non-empty string",
        };
        ErrorResponse::unauthorized(message).into_response_with(StatusCode::UNAUTHORIZED)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LearnerId
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(IdentityRejection::Missing)?
            .to_str()
            .map_err(|_| IdentityRejection::Invalid)?;

        UserId::new(raw.trim())
            .map(LearnerId)
            .map_err(|_| IdentityRejection::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<LearnerId, IdentityRejection> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        LearnerId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_user_id_header() {
        let LearnerId(user) = extract(Some("learner-7")).await.unwrap();
        assert_eq!(user.as_str(), "learner-7");
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        assert_eq!(extract(None).await.unwrap_err(), IdentityRejection::Missing);
    }

    #[tokio::test]
    async fn blank_header_is_rejected() {
        assert_eq!(extract(Some("   ")).await.unwrap_err(), IdentityRejection::Invalid);
    }

    #[test]
    fn rejection_maps_to_401() {
        let response = IdentityRejection::Missing.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
