//! API Module
//!
//! HTTP handlers and routing for the story API.
//!
//! # Endpoints
//! - `GET /api/hackernews/newest` - Newest valid stories as a JSON array
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
