//! Unified error handling for the server.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use trivia_engine::ErrorKind;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] trivia_engine::Error),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Engine(e) => match e.kind() {
                ErrorKind::InvalidParameter => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON with the wrong field types
            JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Short message clients match on for each status.
fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let details = match &self {
            AppError::Engine(e) if e.kind() == ErrorKind::Internal => {
                tracing::error!("Store error: {:?}", e);
                None
            }
            AppError::Engine(e) => {
                tracing::warn!("Engine error: {}", e);
                Some(e.to_string())
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Unprocessable(msg) => {
                tracing::debug!("Request rejected: {}", msg);
                Some(msg.clone())
            }
            AppError::MethodNotAllowed => None,
        };

        let body = Json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: status_message(status).to_string(),
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_engine::{Error, StoreError};

    #[test]
    fn engine_errors_map_to_status() {
        let cases = [
            (Error::invalid("limit", "zero"), StatusCode::BAD_REQUEST),
            (Error::CategoryNotFound(20000), StatusCode::NOT_FOUND),
            (Error::EmptyPage(50000), StatusCode::NOT_FOUND),
            (Error::MissingField("answer"), StatusCode::UNPROCESSABLE_ENTITY),
            (Error::QuestionNotFound(1000000), StatusCode::UNPROCESSABLE_ENTITY),
            (
                Error::Store(StoreError::msg("connection refused")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn messages_follow_status() {
        assert_eq!(status_message(StatusCode::NOT_FOUND), "resource not found");
        assert_eq!(status_message(StatusCode::UNPROCESSABLE_ENTITY), "unprocessable");
        assert_eq!(
            status_message(StatusCode::METHOD_NOT_ALLOWED),
            "method not allowed"
        );
        assert_eq!(
            status_message(StatusCode::SERVICE_UNAVAILABLE),
            "internal server error"
        );
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorResponse {
            success: false,
            error: 404,
            message: "resource not found".into(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }
}
