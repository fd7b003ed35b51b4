//! Bearer-token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::jwt::{verify_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// Verified claims of the consumer calling the endpoint.
///
/// Use as an extractor in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(AuthConsumer(claims): AuthConsumer) -> Reply<Response> {
///     tracing::info!(consumer_id = claims.consumer.id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthConsumer(pub Claims);

impl FromRequestParts<AppState> for AuthConsumer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("missing Authorization header".into()))?
            .to_str()
            .map_err(|_| AppError::BadRequest("Authorization header is not valid ASCII".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized(
                "invalid Authorization format, expected: Bearer <token>".into(),
            )
        })?;

        let claims = verify_token(&state.decoding_key, token).map_err(|err| AppError::Token {
            err,
            codes: state.config.jwt.status_codes,
        })?;

        Ok(AuthConsumer(claims))
    }
}
