use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use httpmock::prelude::*;
use learnhub_client::client::errors::ClientError;
use learnhub_client::client::http::{HttpClient, HttpResource, Navigator};
use learnhub_client::client::{ListFilter, ResourceFetcher};
use learnhub_client::domain::faq::{Faq, NewFaq, UpdateFaq};
use learnhub_client::models::config::ClientConfig;
use learnhub_client::pagination::PageRequest;
use serde_json::json;

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.base_url(),
        timeout_secs: 5,
        page_size: 10,
    }
}

fn faq_json(id: i32) -> serde_json::Value {
    json!({
        "id": id,
        "question": format!("Question {id}"),
        "answer": "Because.",
        "position": id,
        "created_at": "2024-03-01T09:30:00",
        "updated_at": "2024-03-01T09:30:00"
    })
}

fn fetcher(server: &MockServer) -> HttpResource<Faq> {
    let client = HttpClient::new(&config_for(server)).expect("client");
    HttpResource::new(Arc::new(client))
}

#[derive(Default)]
struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
    cleared: AtomicUsize,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }

    fn clear_transient_errors(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_list_sends_pagination_params_and_unwraps_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/faqs")
                .query_param("page", "2")
                .query_param("size", "10")
                .query_param("course_id", "7");
            then.status(200).json_body(json!({
                "data": {
                    "items": [faq_json(11), faq_json(12)],
                    "total_pages": 2,
                    "total_records": 12,
                    "current_page": 2
                }
            }));
        })
        .await;

    let filter = ListFilter::new("course_id", 7);
    let page = fetcher(&server)
        .list(PageRequest::new(2, 10), Some(&filter))
        .await
        .expect("list");

    mock.assert_async().await;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, 11);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.total_records, 12);
    assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn test_server_error_message_is_surfaced_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/faqs/3");
            then.status(409).json_body(json!({ "message": "In use" }));
        })
        .await;

    let err = fetcher(&server).delete(3).await.expect_err("must fail");

    assert_eq!(
        err,
        ClientError::Server {
            status: 409,
            message: "In use".to_string()
        }
    );
}

#[tokio::test]
async fn test_server_error_without_body_has_empty_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/faqs");
            then.status(500);
        })
        .await;

    let err = fetcher(&server)
        .list(PageRequest::default(), None)
        .await
        .expect_err("must fail");

    match err {
        ClientError::Server { status, message } => {
            assert_eq!(status, 500);
            assert!(message.is_empty(), "caller picks the fallback text");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_response_invokes_navigation_port() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/faqs");
            then.status(401).json_body(json!({ "message": "expired" }));
        })
        .await;

    let navigator = Arc::new(RecordingNavigator::default());
    let client = HttpClient::new(&config_for(&server))
        .expect("client")
        .with_navigator(navigator.clone());
    let fetcher: HttpResource<Faq> = HttpResource::new(Arc::new(client));

    let err = fetcher
        .list(PageRequest::default(), None)
        .await
        .expect_err("must fail");

    assert!(matches!(err, ClientError::Server { status: 401, .. }));
    assert_eq!(
        *navigator.paths.lock().unwrap(),
        vec!["/signin".to_string()]
    );
    assert_eq!(navigator.cleared.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_posts_json_and_returns_created_item() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/faqs")
                .header("content-type", "application/json")
                .json_body(json!({
                    "question": "How do I enroll?",
                    "answer": "Open the course page.",
                    "position": 1
                }));
            then.status(201).json_body(faq_json(42));
        })
        .await;

    let created = fetcher(&server)
        .create(&NewFaq {
            question: "How do I enroll?".to_string(),
            answer: "Open the course page.".to_string(),
            position: 1,
        })
        .await
        .expect("create");

    mock.assert_async().await;
    assert_eq!(created.id, 42);
}

#[tokio::test]
async fn test_update_puts_to_item_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/faqs/5");
            then.status(200).json_body(faq_json(5));
        })
        .await;

    let updated = fetcher(&server)
        .update(5, &UpdateFaq {
            question: "Edited".to_string(),
            answer: "Edited.".to_string(),
            position: 2,
        })
        .await
        .expect("update");

    mock.assert_async().await;
    assert_eq!(updated.id, 5);
}

#[tokio::test]
async fn test_delete_accepts_empty_2xx_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/faqs/8");
            then.status(204);
        })
        .await;

    fetcher(&server).delete(8).await.expect("delete");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_maps_to_network_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
        page_size: 10,
    };
    let client = HttpClient::new(&config).expect("client");
    let fetcher: HttpResource<Faq> = HttpResource::new(Arc::new(client));

    let err = fetcher
        .list(PageRequest::default(), None)
        .await
        .expect_err("must fail");

    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}
