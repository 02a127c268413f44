//! Story Aggregation Module
//!
//! Orchestrates cache lookup, ID-list retrieval, chunked concurrent detail
//! fetching and validity filtering.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::StoryCache;
use crate::config::Config;
use crate::error::Result;
use crate::hn::StoryFetcher;
use crate::models::{Story, StoryId};

// == Newest Stories Trait ==
/// The aggregation contract the HTTP layer depends on.
///
/// The `Err` arm is reserved for genuinely unexpected internal faults; all
/// expected upstream flakiness surfaces as a shorter (possibly empty) list.
#[async_trait]
pub trait NewestStories: Send + Sync {
    /// Returns the newest valid stories, in upstream order.
    async fn get_newest_stories(&self) -> Result<Vec<Story>>;
}

// == Story Service ==
/// Aggregates newest stories from the upstream client behind a TTL cache.
///
/// Concurrent cache-miss requests may each re-fetch and re-populate the
/// cache; writes are equivalent, so the last one winning is harmless.
pub struct StoryService {
    /// Upstream story source
    fetcher: Arc<dyn StoryFetcher>,
    /// Shared story cache, injected by the hosting process
    cache: Arc<RwLock<StoryCache>>,
    /// Immutable service settings
    config: Config,
}

impl StoryService {
    // == Constructor ==
    /// Creates a new service over the given fetcher and cache.
    pub fn new(
        fetcher: Arc<dyn StoryFetcher>,
        cache: Arc<RwLock<StoryCache>>,
        config: Config,
    ) -> Self {
        Self {
            fetcher,
            cache,
            config,
        }
    }

    /// Fetches details for `ids` in consecutive chunks of `batch_size`.
    ///
    /// All fetches within a chunk run concurrently; the next chunk starts
    /// only once every fetch in the current one has resolved, so at most
    /// `batch_size` requests are in flight at any time. Result order matches
    /// `ids`.
    async fn fetch_in_chunks(&self, ids: &[StoryId]) -> Vec<Story> {
        let batch_size = self.config.batch_size.max(1);
        let mut fetched = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(batch_size) {
            let stories = join_all(chunk.iter().map(|&id| self.fetcher.fetch_story(id))).await;
            fetched.extend(stories);
        }

        fetched
    }
}

#[async_trait]
impl NewestStories for StoryService {
    async fn get_newest_stories(&self) -> Result<Vec<Story>> {
        // Cache hit requires a present AND non-empty entry. An entry stored
        // empty (all fetched stories invalid) counts as a miss on the next
        // call and forces a re-fetch before its TTL runs out.
        if let Some(cached) = self.cache.write().await.get(&self.config.cache_key) {
            if !cached.is_empty() {
                debug!(stories = cached.len(), "serving newest stories from cache");
                return Ok(cached);
            }
        }

        let ids = self.fetcher.fetch_newest_ids().await;
        if ids.is_empty() {
            // Nothing is cached here, so a later call retries upstream
            // instead of being pinned to an outage for a full TTL.
            warn!("upstream returned no story ids");
            return Ok(Vec::new());
        }

        let ids: Vec<StoryId> = ids
            .into_iter()
            .take(self.config.max_stories_to_fetch)
            .collect();

        let fetched = self.fetch_in_chunks(&ids).await;

        let stories: Vec<Story> = fetched.into_iter().filter(Story::is_valid).collect();
        info!(
            requested = ids.len(),
            valid = stories.len(),
            "aggregated newest stories from upstream"
        );

        self.cache.write().await.insert(
            self.config.cache_key.clone(),
            stories.clone(),
            self.config.cache_ttl(),
        );

        Ok(stories)
    }
}
