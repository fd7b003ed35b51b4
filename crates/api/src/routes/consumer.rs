use axum::routing::get;
use axum::Router;

use crate::handlers::consumer;
use crate::state::AppState;

/// Consumer routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/consumer", get(consumer::get_consumer))
        .route("/consumer/grants", get(consumer::list_grants))
}
