use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use doctor_cell::{doctor_routes, DoctorService};
use shared_utils::test_utils::TestSessions;

async fn setup() -> (Router, String) {
    let (sessions, token) = TestSessions::with_admin().await;
    let service = Arc::new(DoctorService::with_demo_roster());
    (doctor_routes(service, sessions), token)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_requires_session() {
    let (app, _) = setup().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let (app, token) = setup().await;

    let request = Request::builder()
        .uri("/?status=available")
        .header("Authorization", TestSessions::bearer(&token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 5);
    for doctor in json["doctors"].as_array().unwrap() {
        assert_eq!(doctor["status"], "available");
        assert_eq!(doctor["status_label"], "Доступен");
    }
}

#[tokio::test]
async fn test_create_then_update_doctor() {
    let (app, token) = setup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("Authorization", TestSessions::bearer(&token))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({"name": "Лебедев К.О.", "specialty": "Хирург"}).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert_eq!(created["schedule_label"], "Хирург Лебедев К.О.");
    assert_eq!(created["status"], "available");

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created["id"].as_str().unwrap()))
        .header("Authorization", TestSessions::bearer(&token))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({"status": "busy", "patients": 3}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["status"], "busy");
    assert_eq!(updated["patients"], 3);
}

#[tokio::test]
async fn test_unknown_doctor_is_not_found() {
    let (app, token) = setup().await;

    let request = Request::builder()
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .header("Authorization", TestSessions::bearer(&token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
