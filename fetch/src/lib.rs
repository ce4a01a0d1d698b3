//! News endpoint client for Newsfeed.
//!
//! One operation: issue a single `GET <base>/news`, decode the body strictly
//! into a [`NewsResponse`], or fail with a [`FetchFailure`]. There are no
//! retries, no request timeout, no cancellation and no caching.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoint`] | Base URL validation and `/news` resolution |
//! | [`error`] | The single failure kind and its causes |
//! | [`service`] | [`NewsSource`] seam and the reqwest-backed [`NewsService`] |
//!
//! # Usage
//!
//! ```ignore
//! use newsfeed_fetch::{NewsEndpoint, NewsService};
//!
//! let endpoint = NewsEndpoint::parse("http://localhost:8080")?;
//! let service = NewsService::new(endpoint);
//! let news = service.fetch().await?;
//! println!("{} of {} articles", news.articles.len(), news.total);
//! ```

pub mod endpoint;
pub mod error;
pub mod service;

pub use endpoint::{DEFAULT_BASE_URL, EndpointError, NewsEndpoint};
pub use error::FetchFailure;
pub use service::{NewsFut, NewsService, NewsSource, http_client};

pub use newsfeed_types::{Article, NewsResponse};
pub use reqwest::StatusCode;
