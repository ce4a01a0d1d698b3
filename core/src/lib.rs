//! Presentation logic for Newsfeed.
//!
//! [`NewsListController`] is the single use case here: load the news list
//! once and project the outcome onto [`PresentationState`] for whatever
//! renders it. The fetch itself is injected as a shared [`NewsSource`].

mod controller;

pub use controller::{NewsListController, StartOutcome};

pub use newsfeed_fetch::NewsSource;
pub use newsfeed_types::{LOAD_FAILED_MESSAGE, PresentationState, StateSnapshot};
