//! Boundary error type for the HTTP API.
//!
//! Every failure leaving a handler goes through [`ApiError`], and every crate
//! [`Error`] is translated in exactly one place: `From<Error> for ApiError`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::error::Error;

/// Message returned for generation failures whose cause must not leak.
pub const GENERIC_GENERATION_FAILURE: &str = "an error occurred while generating the review";

/// One entry of a 422 `detail` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Errors surfaced to API callers.
#[derive(Debug)]
pub enum ApiError {
    /// The body failed structural validation (422).
    SchemaViolation(Vec<ValidationDetail>),
    /// The title was blank after trimming (400).
    EmptyTitle,
    /// Generation failed (500). Carries the client's detailed message when
    /// the failure was already shaped by the completion client.
    GenerationFailure(Option<String>),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SchemaViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::EmptyTitle => StatusCode::BAD_REQUEST,
            ApiError::GenerationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Domain(DomainError::EmptyBookName) => ApiError::EmptyTitle,
            Error::Upstream(_) => ApiError::GenerationFailure(Some(err.to_string())),
            other => {
                error!(error = %other, "Review generation failed");
                ApiError::GenerationFailure(None)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_error",
        };
        let msg = rejection.body_text();
        warn!(kind, reason = %msg, "Rejected malformed request body");

        ApiError::SchemaViolation(vec![ValidationDetail {
            loc: vec!["body"],
            msg,
            kind,
        }])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::SchemaViolation(details) => json!({ "detail": details }),
            ApiError::EmptyTitle => json!({ "detail": DomainError::EmptyBookName.to_string() }),
            ApiError::GenerationFailure(Some(detail)) => json!({ "detail": detail }),
            ApiError::GenerationFailure(None) => json!({ "detail": GENERIC_GENERATION_FAILURE }),
        };
        (status, Json(body)).into_response()
    }
}
