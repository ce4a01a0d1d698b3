//! Plain-text and JSON rendering of the news list state.

use std::io::{self, Write};

use newsfeed_core::PresentationState;

const LOADING_LINE: &str = "Loading news...";

pub(crate) fn write_text<W: Write>(out: &mut W, state: &PresentationState) -> io::Result<()> {
    if state.is_loading() {
        return writeln!(out, "{LOADING_LINE}");
    }
    if let Some(error) = state.error() {
        return writeln!(out, "{error}");
    }

    let articles = state.articles();
    writeln!(
        out,
        "Latest news: showing {} of {} articles",
        articles.len(),
        state.total()
    )?;
    if articles.is_empty() {
        return writeln!(out, "No articles.");
    }

    for (index, article) in articles.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. {}", index + 1, article.title())?;
        writeln!(out, "   by {}", article.author())?;
        for line in article.content().lines() {
            writeln!(out, "   {line}")?;
        }
    }
    Ok(())
}

pub(crate) fn write_json<W: Write>(out: &mut W, state: &PresentationState) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &state.snapshot())?;
    writeln!(out)
}
