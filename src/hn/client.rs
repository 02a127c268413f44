//! Upstream Client Module
//!
//! HTTP access to the Hacker News API: the newest-story-ID list and single
//! story details. Pure I/O, no business logic.

use async_trait::async_trait;
use tracing::{error, warn};

use crate::config::Config;
use crate::models::{Story, StoryId};

// == Story Fetcher Trait ==
/// Source of story IDs and story details.
///
/// Both methods are infallible by contract: upstream trouble of any kind
/// (network error, non-2xx, timeout, unparseable body) collapses to an empty
/// result and is reported through logging only. The aggregator never has to
/// catch anything from this layer; it only filters empties.
#[async_trait]
pub trait StoryFetcher: Send + Sync {
    /// Fetches the newest story IDs, newest first. Empty on any failure.
    async fn fetch_newest_ids(&self) -> Vec<StoryId>;

    /// Fetches a single story. A default (invalid) story on any failure.
    async fn fetch_story(&self, id: StoryId) -> Story;
}

// == Hacker News Client ==
/// Upstream client backed by a shared reqwest client.
///
/// Timeouts are whatever the injected `reqwest::Client` was built with; a
/// hung upstream call is bounded by that transport timeout and nothing else.
pub struct HnClient {
    /// Shared HTTP client
    http: reqwest::Client,
    /// Newest-IDs endpoint URL
    new_stories_url: String,
    /// Per-story URL template with one `{id}` placeholder
    item_url_template: String,
}

impl HnClient {
    // == Constructor ==
    /// Creates a new client for the endpoints named in `config`.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            new_stories_url: config.new_stories_url.clone(),
            item_url_template: config.item_url_template.clone(),
        }
    }

    /// Expands the item URL template for one story ID.
    fn item_url(&self, id: StoryId) -> String {
        self.item_url_template.replacen("{id}", &id.to_string(), 1)
    }

    async fn try_fetch_newest_ids(&self) -> anyhow::Result<Vec<StoryId>> {
        let ids = self
            .http
            .get(&self.new_stories_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<StoryId>>()
            .await?;
        Ok(ids)
    }

    async fn try_fetch_story(&self, id: StoryId) -> anyhow::Result<Story> {
        let story = self
            .http
            .get(self.item_url(id))
            .send()
            .await?
            .error_for_status()?
            .json::<Story>()
            .await?;
        Ok(story)
    }
}

#[async_trait]
impl StoryFetcher for HnClient {
    async fn fetch_newest_ids(&self) -> Vec<StoryId> {
        match self.try_fetch_newest_ids().await {
            Ok(ids) => ids,
            Err(err) => {
                error!(error = %err, "failed to fetch newest story ids from upstream");
                Vec::new()
            }
        }
    }

    async fn fetch_story(&self, id: StoryId) -> Story {
        match self.try_fetch_story(id).await {
            Ok(story) => story,
            Err(err) => {
                // A single bad item is routine; the aggregator just drops it.
                warn!(id, error = %err, "failed to fetch or parse story");
                Story::default()
            }
        }
    }
}
