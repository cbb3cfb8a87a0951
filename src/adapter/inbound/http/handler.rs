//! Route handlers.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use super::error::ApiError;
use super::AppState;
use crate::domain::{ReviewRequest, ReviewResponse};
use crate::error::Error;
use crate::infrastructure::monitoring::Outcome;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "roast-my-book";

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

/// `GET /health`. Never touches the upstream.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// `POST /api/generate-review`.
pub async fn generate_review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let Json(request) = payload?;
    let (style, language) = (request.style, request.language);

    let started = Instant::now();
    let result = state.reviews.generate(request).await;

    let outcome = match &result {
        Ok(_) => Some(Outcome::Success),
        Err(Error::Domain(_)) => None,
        Err(_) => Some(Outcome::Failure),
    };
    if let Some(outcome) = outcome {
        state
            .metrics
            .record_generation(style, language, outcome, started.elapsed());
    }

    Ok(Json(result?))
}

/// `GET /api/metrics`.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics.render(),
    )
}
