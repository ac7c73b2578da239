//! Integration tests for the fetch endpoint.

use std::sync::Arc;

use chesed_core::{IdeaStore, MemoryStore, SheetsClient, SheetsConfig};
use httpmock::prelude::*;
use reqwest::Client;
use serde_json::{json, Value};

use crate::{create_router, AppState};

/// Test fixture: the endpoint served on a random port, a mock spreadsheet
/// API and an in-memory store.
struct TestFixture {
    client: Client,
    base_url: String,
    sheets_api: MockServer,
    store: Arc<MemoryStore>,
}

impl TestFixture {
    async fn new() -> Self {
        let sheets_api = MockServer::start_async().await;
        let sheets = SheetsClient::new(SheetsConfig {
            base_url: sheets_api.base_url(),
            sheet_id: "sheet-1".to_string(),
            ..SheetsConfig::new("test-key")
        });
        let store = Arc::new(MemoryStore::new());

        let app = create_router(AppState {
            sheets: Arc::new(sheets),
            store: store.clone(),
        });

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestFixture {
            client: Client::new(),
            base_url: format!("http://{}", addr),
            sheets_api,
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let response = fixture.client.get(fixture.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_fetch_ideas_updates_store() {
    let fixture = TestFixture::new().await;
    fixture
        .sheets_api
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet-1/values/A2:C1000")
                .query_param("key", "test-key");
            then.status(200).json_body(json!({
                "values": [["Visit", "a neighbor", "today"], ["Bake", "your teacher", ""]]
            }));
        })
        .await;

    let response = fixture.client.post(fixture.url("/fetch-ideas")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "message": "Ideas updated successfully" }));

    let stored = fixture.store.fetch_idea_components().await.unwrap().unwrap();
    assert_eq!(stored.what, vec!["Visit", "Bake"]);
    assert_eq!(stored.whom, vec!["a neighbor", "your teacher"]);
    assert_eq!(stored.when_to, vec!["today"]);
}

#[tokio::test]
async fn test_fetch_ideas_reports_missing_values() {
    let fixture = TestFixture::new().await;
    fixture
        .sheets_api
        .mock_async(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet-1/values/A2:C1000");
            then.status(200).json_body(json!({ "range": "Sheet1!A2:C1000" }));
        })
        .await;

    let response = fixture.client.get(fixture.url("/fetch-ideas")).send().await.unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("No data found in sheet"));
    assert!(fixture.store.fetch_idea_components().await.unwrap().is_none());
}

#[tokio::test]
async fn test_fetch_ideas_reports_sheets_failure() {
    let fixture = TestFixture::new().await;
    fixture
        .sheets_api
        .mock_async(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet-1/values/A2:C1000");
            then.status(403).body("API key not valid");
        })
        .await;

    let response = fixture.client.post(fixture.url("/fetch-ideas")).send().await.unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("403"));
}

#[tokio::test]
async fn test_options_only_returns_cors_headers() {
    let fixture = TestFixture::new().await;
    let sheets = fixture
        .sheets_api
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({ "values": [] }));
        })
        .await;

    let response = fixture
        .client
        .request(reqwest::Method::OPTIONS, fixture.url("/fetch-ideas"))
        .header("origin", "https://widget.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "apikey, content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    let allowed = response
        .headers()
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(allowed.contains("apikey"));
    assert!(allowed.contains("x-client-info"));
    assert_eq!(sheets.hits_async().await, 0);
}
