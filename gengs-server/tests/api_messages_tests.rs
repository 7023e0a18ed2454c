//! Integration tests for the banner, greeting, and echo handlers
mod common;

use crate::common::create_test_app_state;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gengs_server::build_router;

#[tokio::test]
async fn test_home_banner() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert_eq!(text, "Halo, GenGs! Selamat datang di server pertama kamu!🚀");
}

#[tokio::test]
async fn test_about_banner() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("GET")
        .uri("/about")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert!(text.contains("Rust"));
}

#[tokio::test]
async fn test_halo_message() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/halo")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Halo, GenGs! Ini respons dari server. 🎉");
}

#[tokio::test]
async fn test_kirim_echoes_nama() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/kirim")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"nama":"Annisa"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json["message"],
        "Halo, Annisa! Data kamu sudah diterima. 😊"
    );
}

#[tokio::test]
async fn test_kirim_without_nama_is_rejected() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/kirim")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_info_reports_name_and_version() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api/info")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"]["name"], "GenGs API");
    assert_eq!(json["message"]["version"], "1.0.0");
}

#[tokio::test]
async fn test_feedback_echoes_feedback() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/feedback")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"feedback":"mantap"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Terima kasih atas feedback-nya: mantap!");
}

#[tokio::test]
async fn test_health_reports_degraded_store() {
    let app = build_router(create_test_app_state());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["store"], "unavailable");
}
