use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use platform_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Shared handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("resource not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Validation(msg) => Self::Unprocessable(msg),
            DbError::NotFound => Self::NotFound,
            DbError::Persistence(err) => Self::internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::warn!(%status, error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use sea_orm::DbErr;

    use super::*;

    fn persistence_error() -> DbError {
        DbError::Persistence(DbErr::Custom("connection reset".into()))
    }

    #[test]
    fn taxonomy_maps_to_status() {
        let cases = [
            (
                DbError::validation("id and payload don't match"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DbError::NotFound, StatusCode::NOT_FOUND),
            (persistence_error(), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
        assert_eq!(
            ApiError::bad_request("bad id").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn errors_render_json_body() {
        let response = ApiError::from(persistence_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("connection reset"));
    }
}
