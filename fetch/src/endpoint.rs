//! Resolution of the configured base URL into the `/news` endpoint.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const NEWS_PATH: &str = "news";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("news base URL must not be empty")]
    Empty,
    #[error("failed to parse news base URL {raw:?}: {source}")]
    Parse {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("news base URL must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
    #[error("news base URL {raw:?} cannot carry a path")]
    NotABase { raw: String },
}

/// Fully resolved `GET` target for the news list.
///
/// Built once from configuration; the fetch itself takes no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEndpoint(Url);

impl NewsEndpoint {
    /// Resolve `<base>/news`.
    ///
    /// Any query or fragment on the base is dropped so the request carries no
    /// parameters. A base path is kept: `http://host/api` resolves to
    /// `http://host/api/news`.
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let raw = base.trim();
        if raw.is_empty() {
            return Err(EndpointError::Empty);
        }

        let mut url = Url::parse(raw).map_err(|source| EndpointError::Parse {
            raw: raw.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }
        if url.cannot_be_a_base() {
            return Err(EndpointError::NotABase {
                raw: raw.to_string(),
            });
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let dir = format!("{}/", url.path());
            url.set_path(&dir);
        }

        let news = url.join(NEWS_PATH).map_err(|source| EndpointError::Parse {
            raw: raw.to_string(),
            source,
        })?;
        Ok(Self(news))
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NewsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
