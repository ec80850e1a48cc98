use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("{0}")]
    EmptyResult(&'static str),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] SqlxError),
}

impl TriviaError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }

    /// Wrap a store failure raised inside a mutation.
    pub fn unprocessable(op: &str, err: SqlxError) -> Self {
        Self::Unprocessable(format!("{op} failed: {err}"))
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Self::NotFound { .. } | Self::EmptyResult(_) => Outcome::NotFound,
            Self::BadRequest(_) => Outcome::BadRequest,
            Self::Unprocessable(_) => Outcome::Unprocessable,
            Self::MethodNotAllowed => Outcome::MethodNotAllowed,
            Self::StoreUnavailable(_) => Outcome::InternalError,
        }
    }
}

/// The user-facing outcomes every failure collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    BadRequest,
    Unprocessable,
    MethodNotAllowed,
    InternalError,
}

impl Outcome {
    pub fn status(self) -> StatusCode {
        match self {
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::BadRequest => StatusCode::BAD_REQUEST,
            Outcome::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Outcome::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Outcome::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::NotFound => "Resource not found",
            Outcome::BadRequest => "Bad Request",
            Outcome::Unprocessable => "Unprocessable",
            Outcome::MethodNotAllowed => "Method Not Allowed",
            Outcome::InternalError => "Internal Server Error",
        }
    }

    pub fn body(self) -> ApiErrorResponse {
        ApiErrorResponse {
            success: false,
            error: self.status().as_u16(),
            message: self.message(),
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let outcome = self.outcome();
        match outcome {
            Outcome::InternalError | Outcome::Unprocessable => {
                error!(error = %self, "request failed");
            }
            _ => debug!(error = %self, "request rejected"),
        }
        (outcome.status(), Json(outcome.body())).into_response()
    }
}

/// Standardized failure body: `{success: false, error, message}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}
