//! Tests for `AppError` → envelope mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use respond_api::error::AppError;
use respond_core::{AuthStatusMap, EnvelopeError, TokenError};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::NotFound("widget 42".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "widget 42");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid field value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid field value");
}

#[tokio::test]
async fn token_error_uses_status_map() {
    let err = AppError::Token {
        err: TokenError::Invalid,
        codes: AuthStatusMap::default(),
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], 401);
    assert_eq!(json["message"], "invalid token");
}

#[tokio::test]
async fn json_envelope_error_returns_422() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let expected = format!("json error: {source}");

    let (status, json) = error_to_response(AppError::Envelope(EnvelopeError::Json(source))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], expected);
}

#[tokio::test]
async fn extraction_error_returns_400() {
    let err = AppError::Envelope(EnvelopeError::Extraction("no payload".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "no payload");
}

#[tokio::test]
async fn encoding_error_returns_sanitized_500() {
    let (status, json) = error_to_response(AppError::Envelope(EnvelopeError::Encoding)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "internal server error");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "fail");
    assert!(!json["message"].as_str().unwrap().contains("secret"));
}

#[test]
fn envelope_errors_convert_into_app_errors() {
    assert_matches!(
        AppError::from(EnvelopeError::Encoding),
        AppError::Envelope(EnvelopeError::Encoding)
    );
}
