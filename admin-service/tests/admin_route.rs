//! Integration tests for the admin record route, driven against a mock
//! Firestore REST endpoint.

mod common;

use common::{document_path, TestApp, TEST_ACCESS_TOKEN, TEST_PROJECT_ID, TEST_RECORD_ID};
use admin_service::config::{AdminConfig, StoreConfig};
use admin_service::startup::Application;
use serde_json::json;
use service_core::config::Config as CoreConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn document_body(fields: serde_json::Value) -> serde_json::Value {
    json!({
        "name": format!(
            "projects/{}/databases/(default)/documents/admin/{}",
            TEST_PROJECT_ID, TEST_RECORD_ID
        ),
        "fields": fields,
        "createTime": "2024-01-01T00:00:00Z",
        "updateTime": "2024-01-02T00:00:00Z"
    })
}

#[tokio::test]
async fn admin_route_returns_the_record_when_present() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(document_path()))
        .and(header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_body(json!({
            "email": { "stringValue": "admin@example.com" },
            "quota": { "integerValue": "42" },
            "active": { "booleanValue": true }
        }))))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.get_admin().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], TEST_RECORD_ID);
    assert_eq!(body["email"], "admin@example.com");
    assert_eq!(body["quota"], 42);
    assert_eq!(body["active"], true);
}

#[tokio::test]
async fn admin_route_returns_404_when_the_record_is_missing() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(document_path()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "Document not found.",
                "status": "NOT_FOUND"
            }
        })))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.get_admin().await;

    assert_eq!(response.status().as_u16(), 404);
    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, r#"{"error":"Admin not found"}"#);
}

#[tokio::test]
async fn admin_route_returns_500_when_the_store_fails() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(document_path()))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {
                "code": 503,
                "message": "The datastore operation timed out.",
                "status": "UNAVAILABLE"
            }
        })))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.get_admin().await;

    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Error fetching admin");
}

#[tokio::test]
async fn admin_route_returns_500_when_the_store_is_unreachable() {
    let app = TestApp::spawn_with_unreachable_store().await;

    let response = app.get_admin().await;

    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Error fetching admin");
}

#[tokio::test]
async fn admin_route_prefers_the_document_identifier_over_a_stored_id_field() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(document_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_body(json!({
            "id": { "stringValue": "spoofed" },
            "email": { "stringValue": "admin@example.com" }
        }))))
        .mount(&app.store_server)
        .await;

    let response = app.get_admin().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], TEST_RECORD_ID);
}

#[tokio::test]
async fn admin_route_fetches_the_record_on_every_request() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(document_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_body(json!({
            "email": { "stringValue": "admin@example.com" }
        }))))
        .expect(2)
        .mount(&app.store_server)
        .await;

    let first = app.get_admin().await;
    let second = app.get_admin().await;

    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(second.status().as_u16(), 200);

    // One token exchange serves both lookups
    let requests = app
        .store_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    let token_calls = requests.iter().filter(|r| r.url.path() == "/token").count();
    assert_eq!(token_calls, 1);
}

#[tokio::test]
async fn application_build_fails_when_credentials_are_missing() {
    let config = AdminConfig {
        common: CoreConfig {
            port: 0,
            log_level: "info".to_string(),
        },
        store: StoreConfig {
            credentials_path: "/nonexistent/credentials.json".to_string(),
            api_base_url: "http://127.0.0.1:1".to_string(),
            collection: "admin".to_string(),
            record_id: "some-record".to_string(),
        },
    };

    let result = Application::build(config).await;
    assert!(result.is_err());
}
