#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use respond_core::AuthStatusMap;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use respond_api::auth::jwt::JwtConfig;
use respond_api::config::ServerConfig;
use respond_api::state::AppState;
use respond_api::{handlers, routes};

const PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/private.pem");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build a test `ServerConfig` pointing at the fixture public key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        jwt: JwtConfig {
            public_key_path: fixture("public.pem"),
            status_codes: AuthStatusMap::default(),
        },
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app() -> Router {
    build_app_with(test_config())
}

pub fn build_app_with(config: ServerConfig) -> Router {
    let decoding_key = config
        .jwt
        .decoding_key()
        .expect("fixture public key must load");

    let state = AppState {
        config: Arc::new(config),
        decoding_key: Arc::new(decoding_key),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Sign `claims` with the fixture private key.
pub fn sign_token(claims: &serde_json::Value) -> String {
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY).expect("fixture private key must parse");
    encode(&Header::new(Algorithm::RS256), claims, &key).expect("signing should succeed")
}

/// A token for a consumer holding `grants`, valid for ten minutes.
pub fn consumer_token(grants: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    sign_token(&serde_json::json!({
        "consumer": {
            "id": 7,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "language": "en",
            "grants": grants,
        },
        "exp": now + 600,
        "iat": now,
    }))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body must be JSON")
}
