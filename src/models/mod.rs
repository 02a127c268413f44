//! Domain and response models for the story API
//!
//! Defines the Story type shared between the upstream client, the cache and
//! the HTTP layer, plus the DTOs for auxiliary endpoints.

pub mod responses;
pub mod story;

// Re-export commonly used types
pub use responses::HealthResponse;
pub use story::{Story, StoryId};
