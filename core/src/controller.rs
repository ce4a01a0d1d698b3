//! The news list controller.
//!
//! Owns the [`PresentationState`] and drives it through one activation:
//!
//! ```text
//! new() ──> Loading ──start()──> Loading (fetch in flight)
//!                                   │
//!                     poll()/settle()
//!                      ┌────────────┴────────────┐
//!                      v                         v
//!                   Loaded                     Failed
//! ```
//!
//! The fetch runs as a spawned tokio task. The owner either calls
//! [`NewsListController::poll`] from its frame loop or awaits
//! [`NewsListController::settle`]; the state only changes inside those calls,
//! so a renderer reading [`NewsListController::state`] between them always
//! sees `Loading` before a settled phase.

use std::fmt;
use std::mem;
use std::sync::Arc;

use futures_util::FutureExt;
use tokio::task::{JoinError, JoinHandle};

use newsfeed_fetch::{FetchFailure, NewsSource};
use newsfeed_types::{NewsResponse, PresentationState};

type FetchOutcome = Result<NewsResponse, FetchFailure>;

/// Where the controller is in its single activation.
enum Activation {
    Inactive,
    Pending(JoinHandle<FetchOutcome>),
    Settled,
}

impl Activation {
    fn label(&self) -> &'static str {
        match self {
            Activation::Inactive => "inactive",
            Activation::Pending(_) => "pending",
            Activation::Settled => "settled",
        }
    }
}

/// Result of [`NewsListController::start`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The fetch was issued.
    Started,
    /// This controller was already activated; nothing was issued.
    AlreadyStarted,
}

/// Loads the news list once and exposes the result as [`PresentationState`].
pub struct NewsListController {
    source: Arc<dyn NewsSource>,
    state: PresentationState,
    activation: Activation,
}

impl NewsListController {
    /// The source is shared, not owned: any number of controllers may hold it.
    #[must_use]
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self {
            source,
            state: PresentationState::Loading,
            activation: Activation::Inactive,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    /// True while the fetch is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.activation, Activation::Pending(_))
    }

    /// Activate: enter `Loading` and issue the one fetch.
    ///
    /// Must be called inside a tokio runtime. Only the first call has any
    /// effect; there is no re-fetch.
    pub fn start(&mut self) -> StartOutcome {
        if !matches!(self.activation, Activation::Inactive) {
            tracing::debug!(
                activation = self.activation.label(),
                "News list already activated"
            );
            return StartOutcome::AlreadyStarted;
        }

        self.state = PresentationState::Loading;
        let source = Arc::clone(&self.source);
        let handle = tokio::spawn(async move { source.fetch_news().await });
        self.activation = Activation::Pending(handle);
        StartOutcome::Started
    }

    /// Apply the fetch result if it has finished. Never blocks.
    ///
    /// Returns true when this call moved the state out of `Loading`.
    pub fn poll(&mut self) -> bool {
        let Activation::Pending(handle) = &mut self.activation else {
            return false;
        };
        if !handle.is_finished() {
            return false;
        }

        let Some(joined) = handle.now_or_never() else {
            return false;
        };
        self.activation = Activation::Settled;
        self.apply(joined);
        true
    }

    /// Wait for the in-flight fetch and apply it.
    ///
    /// Returns immediately if the controller was never started or has already
    /// settled. There is no timeout: a transport that never answers keeps this
    /// pending and the state in `Loading`.
    pub async fn settle(&mut self) -> &PresentationState {
        match mem::replace(&mut self.activation, Activation::Settled) {
            Activation::Pending(handle) => {
                let joined = handle.await;
                self.apply(joined);
            }
            other => self.activation = other,
        }
        &self.state
    }

    fn apply(&mut self, joined: Result<FetchOutcome, JoinError>) {
        let outcome = joined.unwrap_or_else(|e| {
            Err(FetchFailure::Interrupted {
                reason: e.to_string(),
            })
        });

        let held = mem::take(&mut self.state);
        self.state = match outcome {
            Ok(news) => {
                tracing::info!(
                    request_id = news.request_id,
                    total = news.total,
                    returned = news.articles.len(),
                    "News loaded"
                );
                PresentationState::loaded(news)
            }
            Err(error) => {
                tracing::error!(%error, "Error loading news");
                held.into_failed()
            }
        };
    }
}

impl fmt::Debug for NewsListController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsListController")
            .field("state", &self.state)
            .field("activation", &self.activation.label())
            .finish_non_exhaustive()
    }
}
