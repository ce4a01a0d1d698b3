//! Shared test utilities and fixtures
//!
//! Common infrastructure for the end-to-end news list tests.

#![allow(dead_code)]

use std::sync::Arc;

use newsfeed_core::NewsListController;
use newsfeed_fetch::{NewsEndpoint, NewsService};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON article as the server sends it.
pub fn article(author: &str, title: &str, content: &str) -> Value {
    json!({"author": author, "title": title, "content": content})
}

/// Full `/news` envelope.
pub fn news_body(total: u64, request_id: u64, timestamp: &str, articles: Vec<Value>) -> Value {
    json!({
        "status": "ok",
        "total": total,
        "requestId": request_id,
        "timestamp": timestamp,
        "articles": articles
    })
}

/// Mount `GET /news` and require it to be hit exactly once.
pub async fn mount_news(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

/// Controller wired to a real `NewsService` pointed at the mock server.
pub fn controller_for(server: &MockServer) -> NewsListController {
    let endpoint = NewsEndpoint::parse(&server.uri()).expect("mock server URI is a valid base");
    NewsListController::new(Arc::new(NewsService::new(endpoint)))
}
