//! City API integration tests
//!
//! Drives the full router (CORS, tracing, handlers, SQLite) through
//! `tower::ServiceExt::oneshot` against a private in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pocasie_backend::{create_app, db, error::ErrorResponse, AppState};
use serde_json::{json, Value};
use shared::City;
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = db::connect_in_memory().await.unwrap();
    create_app(AppState::new(pool))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn bratislava() -> Value {
    json!({
        "nazov": "Bratislava",
        "sila_vetra": 5.5,
        "mm_zrazky": 2.0,
        "teplota": 15.0
    })
}

async fn create_bratislava(app: &Router) -> City {
    let (status, body) = send(app, Method::POST, "/api/mesto", Some(bratislava())).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_value(body).unwrap()
}

fn error_code(body: Value) -> String {
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    error.error.code
}

#[tokio::test]
async fn test_list_empty() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/mesta", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_city() {
    let app = test_app().await;

    let city = create_bratislava(&app).await;
    assert_eq!(city.id, 1);
    assert_eq!(city.nazov, "Bratislava");
    assert_eq!(city.sila_vetra, 5.5);
}

#[tokio::test]
async fn test_create_duplicate_city() {
    let app = test_app().await;
    create_bratislava(&app).await;

    let (status, body) = send(&app, Method::POST, "/api/mesto", Some(bratislava())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error.code, "DUPLICATE_ENTRY");
    assert_eq!(error.error.message_sk, "Mesto uz existuje");
}

#[tokio::test]
async fn test_create_blank_name_rejected() {
    let app = test_app().await;
    let mut input = bratislava();
    input["nazov"] = json!("   ");

    let (status, body) = send(&app, Method::POST, "/api/mesto", Some(input)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert_eq!(error.error.field.as_deref(), Some("nazov"));

    let (_, list) = send(&app, Method::GET, "/api/mesta", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_list_with_data() {
    let app = test_app().await;
    create_bratislava(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/mesta", None).await;
    assert_eq!(status, StatusCode::OK);
    let cities: Vec<City> = serde_json::from_value(body).unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].nazov, "Bratislava");
    assert_eq!(cities[0].id, 1);
}

#[tokio::test]
async fn test_get_city_by_id() {
    let app = test_app().await;
    create_bratislava(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/mesto/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "nazov": "Bratislava",
            "sila_vetra": 5.5,
            "mm_zrazky": 2.0,
            "teplota": 15.0
        })
    );
}

#[tokio::test]
async fn test_get_city_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/mesto/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(body), "NOT_FOUND");
}

#[tokio::test]
async fn test_update_city() {
    let app = test_app().await;
    create_bratislava(&app).await;

    let update = json!({ "sila_vetra": 6.0, "mm_zrazky": 3.0, "teplota": 16.0 });
    let (status, body) = send(&app, Method::PUT, "/api/mesto/1", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    let updated: City = serde_json::from_value(body).unwrap();
    assert_eq!(updated.teplota, 16.0);

    let (_, body) = send(&app, Method::GET, "/api/mesto/1", None).await;
    let city: City = serde_json::from_value(body).unwrap();
    assert_eq!(city.nazov, "Bratislava");
    assert_eq!(city.sila_vetra, 6.0);
    assert_eq!(city.mm_zrazky, 3.0);
    assert_eq!(city.teplota, 16.0);
}

#[tokio::test]
async fn test_update_city_not_found() {
    let app = test_app().await;

    let update = json!({ "sila_vetra": 6.0, "mm_zrazky": 3.0, "teplota": 16.0 });
    let (status, body) = send(&app, Method::PUT, "/api/mesto/999", Some(update)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(body), "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_city() {
    let app = test_app().await;
    create_bratislava(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/api/mesto/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let removed: City = serde_json::from_value(body).unwrap();
    assert_eq!(removed.nazov, "Bratislava");

    let (status, _) = send(&app, Method::GET, "/api/mesto/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_city_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/mesto/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(body), "NOT_FOUND");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/mesto/1")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "*");
}
