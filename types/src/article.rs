//! Wire types for the news endpoint.

use serde::{Deserialize, Serialize};

/// A single news item.
///
/// Every field is required. The original backend names the body `description`,
/// so that key is accepted as an alias for `content`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    author: String,
    title: String,
    #[serde(alias = "description")]
    content: String,
}

impl Article {
    #[must_use]
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Response envelope of `GET /news`.
///
/// `total` is the count reported by the server and is independent of
/// `articles.len()`. Unknown keys are ignored; the known ones are strictly typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total: u64,
    pub request_id: u64,
    /// ISO-8601 as sent by the server; not parsed.
    pub timestamp: String,
    pub articles: Vec<Article>,
}
