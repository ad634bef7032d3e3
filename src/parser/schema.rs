//! Blog record and report schema definitions.
//!
//! `Blog` is the aggregation input. The remaining types are what we
//! write to disk; the report schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// A single blog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Post title (not needed for aggregation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author name, the grouping key
    pub author: String,

    /// Link to the post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of likes
    #[serde(default)]
    pub likes: u64,
}

impl Blog {
    pub fn new(title: impl Into<String>, author: impl Into<String>, likes: u64) -> Self {
        Self {
            title: Some(title.into()),
            author: author.into(),
            url: None,
            likes,
        }
    }

    /// Record without a title, as handed over by callers that strip it
    pub fn untitled(author: impl Into<String>, likes: u64) -> Self {
        Self {
            title: None,
            author: author.into(),
            url: None,
            likes,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Title for display purposes
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

/// Author paired with the number of blogs they wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: u64,
}

/// Author paired with the likes summed over their blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// Top-level statistics report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the blog collection was loaded from
    pub source: String,

    /// Number of blogs aggregated
    pub blog_count: usize,

    /// Sum of likes across all blogs
    pub total_likes: u64,

    /// Most liked blog (absent for an empty collection)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_blog: Option<Blog>,

    /// Author with the most blogs (absent for an empty collection)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_blogs: Option<AuthorBlogs>,

    /// Author with the most likes (absent for an empty collection)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_likes: Option<AuthorLikes>,

    /// Every author tied for the most likes
    #[serde(default)]
    pub top_authors: Vec<AuthorLikes>,

    /// Blog counts per author, largest first
    #[serde(default)]
    pub blogs_by_author: Vec<AuthorBlogs>,

    /// Like totals per author, largest first
    #[serde(default)]
    pub likes_by_author: Vec<AuthorLikes>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
