//! Handlers for the authenticated consumer (`/api/v1/consumer`).

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use chrono::{DateTime, Utc};
use respond_core::{PaginatedResponse, Payload, Response};
use serde::Serialize;
use validator::Validate;

use crate::auth::jwt::Consumer;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthConsumer;
use crate::query::PageParams;
use crate::response::Reply;

/// The consumer as returned to itself.
#[derive(Debug, Serialize)]
struct ConsumerView<'a> {
    #[serde(flatten)]
    consumer: &'a Consumer,
    token_expires_at: Option<DateTime<Utc>>,
}

/// GET /api/v1/consumer
pub async fn get_consumer(AuthConsumer(claims): AuthConsumer) -> AppResult<Reply<Response>> {
    let view = ConsumerView {
        consumer: &claims.consumer,
        token_expires_at: claims.expires_at(),
    };
    let content = serde_json::to_value(&view)
        .map_err(|err| AppError::InternalError(format!("consumer view: {err}")))?;

    tracing::debug!(consumer_id = claims.consumer.id, "Returning consumer");
    Ok(Reply(Response::new(
        200,
        "",
        Some(Payload::new("consumer", content)),
    )))
}

/// GET /api/v1/consumer/grants?page=&per_page=
pub async fn list_grants(
    AuthConsumer(claims): AuthConsumer,
    query: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Reply<PaginatedResponse>> {
    let Query(params) = query?;
    params
        .validate()
        .map_err(|source| AppError::Validation {
            name: "page",
            source,
        })?;

    let grants = &claims.consumer.grants;
    let window = params.window(grants.len() as u64);
    let page = window.slice(grants).to_vec();

    Ok(Reply(PaginatedResponse::paginated(
        &window,
        200,
        "",
        Some(Payload::new("grants", page)),
    )))
}
