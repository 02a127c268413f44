//! Story Model
//!
//! The news item exchanged with the upstream API and returned to clients.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a story by the upstream API.
pub type StoryId = u64;

/// A single news story.
///
/// Deserialization is deliberately lenient: every field is defaulted, so a
/// partial or empty upstream body still yields a `Story` instead of a parse
/// error. Stories missing a title or url are invalid and get filtered out
/// before they reach the cache or a client.
///
/// Upstream fields beyond `id`, `title` and `url` are passed through when
/// present and omitted from responses when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Upstream story identifier
    #[serde(default)]
    pub id: StoryId,
    /// Story headline
    #[serde(default)]
    pub title: String,
    /// Link to the story content
    #[serde(default)]
    pub url: String,
    /// Submitting user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    /// Upstream score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Submission time (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Total comment count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<u64>,
}

impl Story {
    /// A story is valid when both title and url carry non-whitespace content.
    ///
    /// Failed fetches and malformed upstream items both surface as stories
    /// with empty fields, so this single check covers them all.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(title: &str, url: &str) -> Story {
        Story {
            id: 1,
            title: title.to_string(),
            url: url.to_string(),
            ..Story::default()
        }
    }

    #[test]
    fn test_story_with_title_and_url_is_valid() {
        assert!(story("Sample", "http://sample.com").is_valid());
    }

    #[test]
    fn test_default_story_is_invalid() {
        assert!(!Story::default().is_valid());
    }

    #[test]
    fn test_story_with_empty_title_is_invalid() {
        assert!(!story("", "http://sample.com").is_valid());
    }

    #[test]
    fn test_story_with_whitespace_url_is_invalid() {
        assert!(!story("Sample", "   ").is_valid());
    }

    #[test]
    fn test_story_deserialize_full_item() {
        let json = r#"{
            "id": 42,
            "title": "Sample",
            "url": "http://sample.com",
            "by": "someone",
            "score": 17,
            "time": 1722945600,
            "descendants": 3,
            "type": "story"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, 42);
        assert_eq!(story.title, "Sample");
        assert_eq!(story.url, "http://sample.com");
        assert_eq!(story.by.as_deref(), Some("someone"));
        assert_eq!(story.score, Some(17));
        assert!(story.is_valid());
    }

    #[test]
    fn test_story_deserialize_empty_object() {
        let story: Story = serde_json::from_str("{}").unwrap();
        assert_eq!(story, Story::default());
        assert!(!story.is_valid());
    }

    #[test]
    fn test_story_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&story("Sample", "http://sample.com")).unwrap();
        assert!(json.contains("\"title\""));
        assert!(!json.contains("\"by\""));
        assert!(!json.contains("\"score\""));
    }
}
