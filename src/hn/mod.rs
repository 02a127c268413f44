//! Hacker News Module
//!
//! Upstream client and story aggregation.
//!
//! The client does plain I/O against the upstream API; the service owns the
//! cache and orchestrates batched concurrent fetching on top of it.

mod client;
mod service;

// Re-export public types
pub use client::{HnClient, StoryFetcher};
pub use service::{NewestStories, StoryService};
