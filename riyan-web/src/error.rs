//! Error types for riyan-web
//!
//! HTML pages fail with [`PageError`], rendered inside the site layout.
//! JSON endpoints fail with [`ApiError`].

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::render::layout;

/// Page handler error
#[derive(Debug, Error)]
pub enum PageError {
    /// Requested item does not exist (404); holds the message shown
    #[error("{0}")]
    NotFound(String),

    /// Database query failed (500)
    #[error("Query failed: {0}")]
    Query(String),
}

impl From<riyan_common::Error> for PageError {
    fn from(err: riyan_common::Error) -> Self {
        if err.is_not_found() {
            PageError::NotFound("Page not found.".to_string())
        } else {
            PageError::Query(err.to_string())
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, body) = match self {
            PageError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                "Not found",
                format!(r#"<section class="notice"><p>{}</p></section>"#, layout::text(&message)),
            ),
            PageError::Query(message) => {
                error!("Page query failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    format!(
                        r#"<section class="notice"><h1>Something went wrong</h1><p>{}</p></section>"#,
                        layout::text(&message)
                    ),
                )
            }
        };

        (status, Html(layout::page(title, &body))).into_response()
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;

/// JSON endpoint error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// riyan-common error
    #[error("Common error: {0}")]
    Common(#[from] riyan_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Common(ref err) if err.is_not_found() => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            ApiError::Common(ref err) => {
                error!("API query failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    err.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Query failures map to 500, missing rows to 404
    #[test]
    fn test_page_error_status() {
        let err: PageError = riyan_common::Error::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: PageError = riyan_common::Error::NotFound("project".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_not_found_page_shows_message() {
        let response = PageError::NotFound("Project not found.".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Project not found."));
        assert!(html.contains("<nav"));
    }

    #[tokio::test]
    async fn test_api_error_body_shape() {
        let response = ApiError::BadRequest("limit must be positive".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "limit must be positive");
    }
}
