//! Core domain types for Newsfeed.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.
//!
//! | Type | Role |
//! |------|------|
//! | [`Article`] | One news item as sent by the server |
//! | [`NewsResponse`] | The envelope returned by `GET /news` |
//! | [`PresentationState`] | Loading / loaded / failed projection read by renderers |
//! | [`StateSnapshot`] | Flat `{articles, loading, error, total}` view of the state |

mod article;
mod state;

pub use article::{Article, NewsResponse};
pub use state::{LOAD_FAILED_MESSAGE, PresentationState, StateSnapshot};
