//! API Handlers
//!
//! HTTP request handlers for each story API endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::error;

use crate::error::Result;
use crate::hn::NewestStories;
use crate::models::{HealthResponse, Story};

/// Application state shared across all handlers.
///
/// Holds the story aggregation service behind its trait so tests can swap in
/// mocks.
#[derive(Clone)]
pub struct AppState {
    /// Story aggregation service
    pub stories: Arc<dyn NewestStories>,
}

impl AppState {
    /// Creates a new AppState over the given aggregation service.
    pub fn new(stories: Arc<dyn NewestStories>) -> Self {
        Self { stories }
    }
}

/// Handler for GET /api/hackernews/newest
///
/// Returns the newest valid stories as a JSON array. Upstream trouble never
/// reaches this handler; it surfaces as a shorter list. An error here means
/// something internal broke, which gets logged and converted to a 500.
pub async fn newest_handler(State(state): State<AppState>) -> Result<Json<Vec<Story>>> {
    match state.stories.get_newest_stories().await {
        Ok(stories) => Ok(Json(stories)),
        Err(err) => {
            error!(error = %err, "failed to aggregate newest stories");
            Err(err)
        }
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
