use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can produce, mapped onto the API's status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field.
    #[error("{0}")]
    Validation(String),
    /// No usable bearer token on the request, or a failed login.
    #[error("{0}")]
    Unauthenticated(String),
    /// A bearer token was presented but did not verify.
    #[error("{0}")]
    Forbidden(String),
    /// Row absent or owned by someone else; the two are indistinguishable.
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(e) if is_unique_violation(e) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Database(e) if is_unique_violation(e) => {
                "Email or username already registered".to_string()
            }
            // 500 bodies carry the underlying message. Debug aid inherited
            // from the original service; not safe for untrusted deployments.
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                e.to_string()
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                e.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
