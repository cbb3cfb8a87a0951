//! HTTP API (axum).
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /health` | [`handler::health`] |
//! | `POST /api/generate-review` | [`handler::generate_review`] |
//! | `GET /api/metrics` | [`handler::metrics`] |

pub mod error;
pub mod handler;
pub mod middleware;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::application::ReviewService;
use crate::infrastructure::monitoring::Metrics;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewService>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(reviews: ReviewService) -> Self {
        Self {
            reviews: Arc::new(reviews),
            metrics: Arc::new(Metrics::new()),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/api/generate-review", post(handler::generate_review))
        .route("/api/metrics", get(handler::metrics))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::track_requests,
        ))
        .with_state(state)
}
