use std::sync::Arc;

use jsonwebtoken::DecodingKey;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Public key access tokens are verified against.
    pub decoding_key: Arc<DecodingKey>,
}
