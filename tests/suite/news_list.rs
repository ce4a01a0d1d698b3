//! End-to-end news list tests: controller → service → HTTP → controller.

use std::time::Duration;

use newsfeed_core::{LOAD_FAILED_MESSAGE, StartOutcome, StateSnapshot};
use newsfeed_types::Article;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{article, controller_for, mount_news, news_body};

fn failed() -> StateSnapshot {
    StateSnapshot {
        articles: Vec::new(),
        loading: false,
        error: Some(LOAD_FAILED_MESSAGE.to_string()),
        total: 0,
    }
}

#[tokio::test]
async fn two_articles_load() {
    let server = MockServer::start().await;
    let body = news_body(
        2,
        1,
        "2024-01-01T00:00:00Z",
        vec![article("A", "T1", "C1"), article("B", "T2", "C2")],
    );
    mount_news(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let mut controller = controller_for(&server);
    assert_eq!(controller.start(), StartOutcome::Started);
    let state = controller.settle().await;

    assert_eq!(
        state.snapshot(),
        StateSnapshot {
            articles: vec![Article::new("A", "T1", "C1"), Article::new("B", "T2", "C2")],
            loading: false,
            error: None,
            total: 2,
        }
    );
}

#[tokio::test]
async fn server_error_fails_with_fixed_message() {
    let server = MockServer::start().await;
    mount_news(
        &server,
        ResponseTemplate::new(500).set_body_string("java.lang.NullPointerException"),
    )
    .await;

    let mut controller = controller_for(&server);
    let _ = controller.start();
    let state = controller.settle().await;

    assert_eq!(state.snapshot(), failed());
}

#[tokio::test]
async fn empty_page_keeps_server_total() {
    let server = MockServer::start().await;
    let body = news_body(100, 2, "...", Vec::new());
    mount_news(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let mut controller = controller_for(&server);
    let _ = controller.start();
    let state = controller.settle().await;

    assert_eq!(state.total(), 100);
    assert!(state.articles().is_empty());
    assert_eq!(state.error(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn total_is_never_derived_from_article_count() {
    let server = MockServer::start().await;
    let articles = (0..10)
        .map(|i| article("Emily Chen", &format!("Story {i}"), "Body"))
        .collect();
    let body = news_body(50, 3, "2024-01-01T00:00:00Z", articles);
    mount_news(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let mut controller = controller_for(&server);
    let _ = controller.start();
    let state = controller.settle().await;

    assert_eq!(state.articles().len(), 10);
    assert_eq!(state.total(), 50);
}

#[tokio::test]
async fn loading_is_observed_before_a_slow_response() {
    let server = MockServer::start().await;
    let body = news_body(1, 4, "2024-01-01T00:00:00Z", vec![article("A", "T", "C")]);
    mount_news(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(body)
            .set_delay(Duration::from_millis(200)),
    )
    .await;

    let mut controller = controller_for(&server);
    let _ = controller.start();

    assert_eq!(
        controller.state().snapshot(),
        StateSnapshot {
            articles: Vec::new(),
            loading: true,
            error: None,
            total: 0,
        }
    );
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!controller.poll());
    assert!(controller.state().is_loading());

    let state = controller.settle().await;
    assert_eq!(state.total(), 1);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn malformed_payload_fails_safe() {
    let server = MockServer::start().await;
    mount_news(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "total": 1,
            "requestId": 5,
            "timestamp": "2024-01-01T00:00:00Z",
            "articles": [{"author": "A", "title": "T"}]
        })),
    )
    .await;

    let mut controller = controller_for(&server);
    let _ = controller.start();
    assert_eq!(controller.settle().await.snapshot(), failed());
}

#[tokio::test]
async fn repeated_start_issues_one_request() {
    let server = MockServer::start().await;
    let body = news_body(0, 6, "2024-01-01T00:00:00Z", Vec::new());
    // `mount_news` fails the test on drop unless exactly one request arrived.
    mount_news(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let mut controller = controller_for(&server);
    assert_eq!(controller.start(), StartOutcome::Started);
    assert_eq!(controller.start(), StartOutcome::AlreadyStarted);
    let _ = controller.settle().await;
    assert_eq!(controller.start(), StartOutcome::AlreadyStarted);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn controllers_sharing_a_server_fetch_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_body(
            1,
            7,
            "2024-01-01T00:00:00Z",
            vec![article("A", "T", "C")],
        )))
        .expect(2)
        .mount(&server)
        .await;

    let mut first = controller_for(&server);
    let mut second = controller_for(&server);
    let _ = first.start();
    let _ = second.start();

    let (first_state, second_state) = tokio::join!(first.settle(), second.settle());
    assert_eq!(first_state.total(), 1);
    assert_eq!(second_state.total(), 1);
}
