//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type at the HTTP boundary. Direct
//! lookups report a single `error` string; the creation flow reports an
//! `errors` list.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{EntityKind, ValidationError};

/// Body of a lookup failure.
///
/// ```json
/// { "error": "Restaurant not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Body of a rejected creation request.
///
/// ```json
/// { "errors": ["price must be between 1 and 30, got 31"] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResponse {
    /// Human-readable messages, never empty.
    pub errors: Vec<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant          | HTTP Status               | Body               |
/// |------------------|---------------------------|--------------------|
/// | `NotFound`       | 404 Not Found             | `{error}`          |
/// | `Validation`     | 400 Bad Request           | `{errors: [...]}`  |
/// | `CreationFailed` | 400 Bad Request           | `{errors: [...]}`  |
/// | `Persistence`    | 500 Internal Server Error | `{error}`          |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity addressed by the request path does not exist.
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// Request input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Creating an entity failed for a reason that is not the client's
    /// input. The cause is logged, not returned.
    #[error("Failed to create {0}")]
    CreationFailed(EntityKind),

    /// Store failure outside the creation flow.
    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::CreationFailed(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::NotFound(_) => (
                status,
                axum::Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Validation(_) | Self::CreationFailed(_) => (
                status,
                axum::Json(ErrorsResponse {
                    errors: vec![self.to_string()],
                }),
            )
                .into_response(),
            Self::Persistence(ref err) => {
                tracing::error!(error = %err, "store failure");
                (
                    status,
                    axum::Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("body should be JSON");
        };
        (status, json)
    }

    #[tokio::test]
    async fn not_found_is_singular_404() {
        let (status, json) = body_json(ApiError::NotFound(EntityKind::Restaurant)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "Restaurant not found" }));
    }

    #[tokio::test]
    async fn validation_is_plural_400() {
        let err = ApiError::from(ValidationError::NotFound(EntityKind::Pizza));
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "errors": ["Pizza not found"] }));
    }

    #[tokio::test]
    async fn creation_failure_hides_details() {
        let (status, json) = body_json(ApiError::CreationFailed(EntityKind::RestaurantPizza)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "errors": ["Failed to create RestaurantPizza"] })
        );
    }

    #[tokio::test]
    async fn persistence_failure_is_500_without_details() {
        let (status, json) = body_json(ApiError::Persistence(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }
}
