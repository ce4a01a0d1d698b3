//! Newsfeed CLI - the owning context for the news list.
//!
//! # Flow
//!
//! ```text
//! main() -> init_tracing() -> NewsfeedConfig::load() -> NewsEndpoint::parse()
//!        -> NewsListController::start()  (renders "Loading")
//!        -> NewsListController::settle() (renders the final state)
//! ```
//!
//! A failed load is not a process failure: the fixed message is printed and
//! the exit status is still success. Logs never go to stdout.

mod render;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use newsfeed_config::{NewsfeedConfig, OutputFormat, config_dir};
use newsfeed_core::NewsListController;
use newsfeed_fetch::{DEFAULT_BASE_URL, NewsEndpoint, NewsService};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // stdout belongs to the renderer.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.newsfeed/logs/newsfeed.log
    if let Some(dir) = config_dir() {
        candidates.push(dir.join("logs").join("newsfeed.log"));
    }

    // Fallback: ./.newsfeed/logs/newsfeed.log
    candidates.push(PathBuf::from(".newsfeed").join("logs").join("newsfeed.log"));

    candidates
}

fn load_config() -> NewsfeedConfig {
    match NewsfeedConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            NewsfeedConfig::default()
        }
    }
}

fn resolve_endpoint(config: &NewsfeedConfig) -> Result<NewsEndpoint> {
    if let Some(base_url) = config.base_url() {
        match NewsEndpoint::parse(base_url) {
            Ok(endpoint) => return Ok(endpoint),
            Err(err) => {
                tracing::warn!("Ignoring configured news base URL: {err}");
            }
        }
    }
    NewsEndpoint::parse(DEFAULT_BASE_URL).context("default news base URL is invalid")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let output = config.output();
    let endpoint = resolve_endpoint(&config)?;
    tracing::info!(%endpoint, "Loading news");

    let service = Arc::new(NewsService::new(endpoint));
    let mut controller = NewsListController::new(service);
    let _ = controller.start();

    let stdout = io::stdout();
    if output == OutputFormat::Text {
        let mut out = stdout.lock();
        render::write_text(&mut out, controller.state())?;
        out.flush()?;
    }

    let state = controller.settle().await;

    let mut out = stdout.lock();
    match output {
        OutputFormat::Text => render::write_text(&mut out, state)?,
        OutputFormat::Json => render::write_json(&mut out, state)?,
    }
    out.flush()?;
    Ok(())
}
