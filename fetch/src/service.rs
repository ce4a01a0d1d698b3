//! The news fetch service.

use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use std::time::Duration;

use futures_util::StreamExt;
use newsfeed_types::NewsResponse;

use crate::endpoint::NewsEndpoint;
use crate::error::FetchFailure;

// Transport tuning only. A request itself has no deadline.
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Future returned by [`NewsSource::fetch_news`].
pub type NewsFut<'a> = Pin<Box<dyn Future<Output = Result<NewsResponse, FetchFailure>> + Send + 'a>>;

/// Anything that can produce one news envelope per call.
///
/// Implementations hold no mutable state between calls, so one instance can
/// be shared by any number of controllers.
pub trait NewsSource: Send + Sync {
    fn fetch_news(&self) -> NewsFut<'_>;
}

/// Shared HTTP client for the news endpoint.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
            .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build tuned HTTP client: {e}. Using reqwest defaults.");
                reqwest::Client::new()
            })
    })
}

/// reqwest-backed [`NewsSource`] for `GET <base>/news`.
#[derive(Debug, Clone)]
pub struct NewsService {
    client: reqwest::Client,
    endpoint: NewsEndpoint,
}

impl NewsService {
    #[must_use]
    pub fn new(endpoint: NewsEndpoint) -> Self {
        Self::with_client(http_client().clone(), endpoint)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: NewsEndpoint) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &NewsEndpoint {
        &self.endpoint
    }

    /// Issue exactly one `GET` and decode the body.
    ///
    /// Non-2xx statuses, unreadable bodies, and bodies that do not match the
    /// envelope all fail; nothing is synthesized from a partial payload.
    pub async fn fetch(&self) -> Result<NewsResponse, FetchFailure> {
        let url = self.endpoint.as_str();
        tracing::debug!(%url, "Fetching news");

        let response = self
            .client
            .get(self.endpoint.url().clone())
            .send()
            .await
            .map_err(|source| FetchFailure::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            tracing::warn!(%url, %status, %body, "News endpoint returned an error status");
            return Err(FetchFailure::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|source| FetchFailure::Body {
            url: url.to_string(),
            source,
        })?;

        let news: NewsResponse =
            serde_json::from_slice(&bytes).map_err(|source| FetchFailure::Payload {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!(
            request_id = news.request_id,
            total = news.total,
            returned = news.articles.len(),
            "Decoded news response"
        );
        Ok(news)
    }
}

impl NewsSource for NewsService {
    fn fetch_news(&self) -> NewsFut<'_> {
        Box::pin(self.fetch())
    }
}

async fn read_capped_error_body(response: reqwest::Response) -> String {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}
