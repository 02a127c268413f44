//! Hacker News Newest Stories API
//!
//! Serves the newest Hacker News stories over HTTP, with batched concurrent
//! upstream fetching and a short-lived in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod hn;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
