//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{ensure, Result};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the upstream "newest story IDs" endpoint
    pub new_stories_url: String,
    /// URL template for a single story, with one `{id}` placeholder
    pub item_url_template: String,
    /// Key under which the aggregated story list is cached
    pub cache_key: String,
    /// Maximum number of stories fetched per aggregation run
    pub max_stories_to_fetch: usize,
    /// Number of concurrent detail fetches per chunk
    pub batch_size: usize,
    /// Cache entry lifetime in minutes
    pub cache_ttl_minutes: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NEW_STORIES_URL` - Upstream newest-IDs endpoint (default: Hacker News newstories)
    /// - `ITEM_URL_TEMPLATE` - Per-story URL template with `{id}` (default: Hacker News item)
    /// - `CACHE_KEY` - Cache key for the story list (default: "hacker-news-newest")
    /// - `MAX_STORIES_TO_FETCH` - Stories fetched per run (default: 50)
    /// - `BATCH_SIZE` - Concurrent fetches per chunk (default: 10)
    /// - `CACHE_TTL_MINUTES` - Cache lifetime in minutes (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            new_stories_url: env::var("NEW_STORIES_URL").unwrap_or_else(|_| {
                "https://hacker-news.firebaseio.com/v0/newstories.json".to_string()
            }),
            item_url_template: env::var("ITEM_URL_TEMPLATE").unwrap_or_else(|_| {
                "https://hacker-news.firebaseio.com/v0/item/{id}.json".to_string()
            }),
            cache_key: env::var("CACHE_KEY").unwrap_or_else(|_| "hacker-news-newest".to_string()),
            max_stories_to_fetch: env::var("MAX_STORIES_TO_FETCH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            batch_size: env::var("BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cache_ttl_minutes: env::var("CACHE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Checks the loaded values for mistakes that would only surface mid-request.
    ///
    /// Called once at startup so a bad deployment fails immediately instead of
    /// serving empty responses.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.item_url_template.matches("{id}").count() == 1,
            "ITEM_URL_TEMPLATE must contain exactly one {{id}} placeholder, got: {}",
            self.item_url_template
        );
        ensure!(!self.cache_key.is_empty(), "CACHE_KEY must not be empty");
        ensure!(
            self.max_stories_to_fetch > 0,
            "MAX_STORIES_TO_FETCH must be at least 1"
        );
        ensure!(self.batch_size > 0, "BATCH_SIZE must be at least 1");
        Ok(())
    }

    /// Returns the cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes * 60)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            new_stories_url: "https://hacker-news.firebaseio.com/v0/newstories.json".to_string(),
            item_url_template: "https://hacker-news.firebaseio.com/v0/item/{id}.json".to_string(),
            cache_key: "hacker-news-newest".to_string(),
            max_stories_to_fetch: 50,
            batch_size: 10,
            cache_ttl_minutes: 5,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}
