use super::server::{router, ServerState};
use crate::config::SecurelinkConfig;
use crate::events::EventBus;
use crate::session::OpsConsole;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = SecurelinkConfig::default();
    let event_bus = Arc::new(EventBus::new(config.system.event_bus_capacity));
    let console = Arc::new(RwLock::new(OpsConsole::new(&config, Arc::clone(&event_bus))));
    router(ServerState { console, event_bus })
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn send_json(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["stores"]["cameras"], 9);
    assert_eq!(body["stores"]["incidents"], 4);
    assert_eq!(body["stores"]["locations"], 4);
}

#[tokio::test]
async fn test_overview_page_is_html() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Security Operations Center"));
    assert!(html.contains("8 of 9 cameras online"));
}

#[tokio::test]
async fn test_camera_list_unfiltered() {
    let app = app();
    let (status, body) = get(&app, "/api/cameras").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9);
    assert_eq!(body["online"], 8);
    assert_eq!(body["cameras"].as_array().unwrap().len(), 9);
    // Store order preserved
    assert_eq!(body["cameras"][0]["id"], "cam-001");
}

#[tokio::test]
async fn test_camera_search() {
    let app = app();
    let (_, body) = get(&app, "/api/cameras?search=storage").await;

    let cameras = body["cameras"].as_array().unwrap();
    assert_eq!(cameras.len(), 1);
    assert_eq!(cameras[0]["name"], "Storage Area");
}

#[tokio::test]
async fn test_camera_facets_combine() {
    let app = app();

    let (_, body) = get(&app, "/api/cameras?status=recording").await;
    assert_eq!(body["cameras"].as_array().unwrap().len(), 3);

    let (_, body) = get(&app, "/api/cameras?status=online&resolution=720p").await;
    let cameras = body["cameras"].as_array().unwrap();
    assert_eq!(cameras.len(), 1);
    assert_eq!(cameras[0]["id"], "cam-008");
}

#[tokio::test]
async fn test_camera_lookup() {
    let app = app();

    let (status, body) = get(&app, "/api/cameras/cam-002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Cash Register 1");
    assert_eq!(body["status"], "recording");

    let (status, _) = get(&app, "/api/cameras/cam-404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_incident_filters() {
    let app = app();

    let (_, body) = get(&app, "/api/incidents?severity=medium").await;
    assert_eq!(body["total"], 2);

    let (_, body) = get(&app, "/api/incidents?search=graffiti").await;
    let incidents = body["incidents"].as_array().unwrap();
    assert_eq!(incidents.len(), 1);
    assert_eq!(incidents[0]["id"], "INC-004");

    let (_, body) = get(&app, "/api/incidents?severity=high&status=open").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_create_incident_grows_store() {
    let app = app();

    let (status, body) = send_json(&app, Method::POST, "/api/incidents", "").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "INC-005");
    assert_eq!(body["status"], "open");
    assert_eq!(body["type"], "Manual Report");

    let (_, body) = get(&app, "/api/incidents").await;
    assert_eq!(body["total"], 5);
    assert_eq!(body["incidents"][0]["id"], "INC-005");
}

#[tokio::test]
async fn test_update_incident_status() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::PATCH,
        "/api/incidents/INC-002/status",
        r#"{"status":"resolved"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], true);
    assert_eq!(body["incident"]["status"], "resolved");

    let (_, body) = get(&app, "/api/incidents?status=resolved").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_update_unknown_incident_is_a_noop() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::PATCH,
        "/api/incidents/INC-999/status",
        r#"{"status":"resolved"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], false);
    assert!(body.get("incident").is_none() || body["incident"].is_null());

    // Store is untouched
    let (_, body) = get(&app, "/api/incidents?status=resolved").await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_location_filters() {
    let app = app();

    let (_, body) = get(&app, "/api/locations?search=warehouse").await;
    let locations = body["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0]["name"], "Warehouse Zone");

    let (_, body) = get(&app, "/api/locations?status=partial").await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = app();
    let (status, body) = get(&app, "/api/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cards"].as_array().unwrap().len(), 4);
    assert_eq!(body["summary"]["incidents"]["open"], 1);
    assert_eq!(body["summary"]["cameras"]["online"], 8);
    assert_eq!(body["activity"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_analytics_endpoint() {
    let app = app();
    let (status, body) = get(&app, "/api/analytics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekly_trend"].as_array().unwrap().len(), 7);
    assert_eq!(body["hourly_traffic"].as_array().unwrap().len(), 6);
    assert_eq!(body["incident_distribution"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_report_generation() {
    let app = app();

    let (_, body) = get(&app, "/api/reports").await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/reports",
        r#"{"kind":"daily_summary"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Daily Security Summary");

    let (_, body) = get(&app, "/api/reports").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_refresh_returns_summary() {
    let app = app();
    let (status, body) = send_json(&app, Method::POST, "/api/refresh", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["incidents"]["open"], 1);
    assert_eq!(body["locations"]["cameras"], 56);
}
