pub mod consumer;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /consumer                    the calling consumer (requires auth)
/// /consumer/grants             paginated grants of the caller (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(consumer::router())
}
