//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is involved.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use roles_api::error::AppError;
use roles_core::error::CoreError;

async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_detail() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Role",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"detail": "Role with id 42 not found"}));
}

#[tokio::test]
async fn validation_error_returns_422() {
    let err = AppError::Core(CoreError::Validation(
        "name must be at most 50 characters, got 51".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["detail"], "name must be at most 50 characters, got 51");
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "password authentication failed for user postgres".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "An internal error occurred");
    assert!(!json.to_string().contains("password"));
}

#[tokio::test]
async fn row_not_found_from_driver_is_still_an_internal_error() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn payload_error_returns_422_with_detail() {
    let err = AppError::Payload("Invalid JSON body: EOF while parsing".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json, serde_json::json!({"detail": "Invalid JSON body: EOF while parsing"}));
}
