//! Presentation state for the news list.
//!
//! The three phases are encoded as enum variants so the flag combinations
//! renderers read (`loading`, `error`, `articles`) cannot contradict each other.

use serde::Serialize;

use crate::{Article, NewsResponse};

/// User-facing message for any failed load. The cause is never shown.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load news articles";

/// Load phase of a news list.
///
/// Transitions: `Loading -> Loaded` on success, `Loading -> Failed` on any
/// fetch failure. Both settled phases are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PresentationState {
    /// Fetch issued (or about to be); no data yet.
    #[default]
    Loading,
    /// Fetch succeeded. `total` is the server-reported count.
    Loaded { articles: Vec<Article>, total: u64 },
    /// Fetch failed. Data is whatever was held when the fetch began.
    Failed { articles: Vec<Article>, total: u64 },
}

impl PresentationState {
    /// Project a successful response. `total` is passed through verbatim.
    #[must_use]
    pub fn loaded(response: NewsResponse) -> Self {
        Self::Loaded {
            articles: response.articles,
            total: response.total,
        }
    }

    /// Move into `Failed`, keeping the articles and total held so far.
    #[must_use]
    pub fn into_failed(self) -> Self {
        match self {
            Self::Loading => Self::Failed {
                articles: Vec::new(),
                total: 0,
            },
            Self::Loaded { articles, total } | Self::Failed { articles, total } => {
                Self::Failed { articles, total }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once the fetch has either succeeded or failed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        match self {
            Self::Failed { .. } => Some(LOAD_FAILED_MESSAGE),
            Self::Loading | Self::Loaded { .. } => None,
        }
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        match self {
            Self::Loading => &[],
            Self::Loaded { articles, .. } | Self::Failed { articles, .. } => articles,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Self::Loading => 0,
            Self::Loaded { total, .. } | Self::Failed { total, .. } => *total,
        }
    }

    /// Flat view with the field names renderers expect.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            articles: self.articles().to_vec(),
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            total: self.total(),
        }
    }
}

/// Owned, serializable copy of a [`PresentationState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
    pub total: u64,
}
