//! API error types with IntoResponse.
//!
//! Every failure leaves the server as the same envelope:
//! `{"success": false, "error": <status>, "message": <text>}`. The detailed
//! cause is logged, not returned.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::DbError;
use crate::selection::{ErrorKind, SelectionError};

/// Error envelope DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code
    #[schema(example = 404)]
    pub error: u16,
    /// Fixed message for the status
    #[schema(example = "resource not found")]
    pub message: String,
}

/// Request-level errors, one per status the API answers with.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    #[diagnostic(code(trivia::api::bad_request))]
    BadRequest(String),

    #[error("Not found: {0}")]
    #[diagnostic(code(trivia::api::not_found))]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    #[diagnostic(code(trivia::api::unprocessable))]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The fixed text clients see.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad request",
            Self::NotFound(_) => "resource not found",
            Self::Unprocessable(_) => "unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Unprocessable(detail) => tracing::error!("{}", detail),
            Self::BadRequest(detail) | Self::NotFound(detail) => tracing::debug!("{}", detail),
        }

        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<SelectionError> for ApiError {
    fn from(e: SelectionError) -> Self {
        match e.kind() {
            ErrorKind::BadRequest => Self::BadRequest(e.to_string()),
            ErrorKind::NotFound => Self::NotFound(e.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound(e.to_string()),
            _ => Self::Unprocessable(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

// Non-numeric path ids never name a resource
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(rejection.body_text())
    }
}

/// Errors that stop the server itself.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(trivia::server::bind))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(trivia::server::serve))]
    Serve(#[source] std::io::Error),
}
