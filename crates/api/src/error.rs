use axum::extract::rejection::QueryRejection;
use axum::response::IntoResponse;
use respond_core::types::{INTERNAL_SERVER_ERROR, UNAUTHORIZED};
use respond_core::{AuthStatusMap, EnvelopeError, Response, TokenError};

use crate::response::Reply;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a `fail` envelope built with the canned
/// constructors, so error bodies have the same shape as successful ones.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Building or reading an envelope failed.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// The bearer token was rejected; `codes` decides the response code.
    #[error("{err}")]
    Token {
        err: TokenError,
        codes: AuthStatusMap,
    },

    /// No usable credentials were presented.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Query string could not be parsed.
    #[error(transparent)]
    Query(#[from] QueryRejection),

    /// Input parsed but failed validation; `name` identifies the input.
    #[error("validation error on {name}: {source}")]
    Validation {
        name: &'static str,
        source: validator::ValidationErrors,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The envelope this error is reported as.
    pub fn to_envelope(&self) -> Response {
        match self {
            AppError::Envelope(EnvelopeError::Json(err)) => Response::json_error(err),
            AppError::Envelope(EnvelopeError::Extraction(msg)) => Response::bad_request(msg.clone()),
            AppError::Envelope(err) => internal(err),
            AppError::Token { err, codes } => Response::token_error(*err, codes),
            AppError::Unauthorized(msg) => Response::new(UNAUTHORIZED, msg.clone(), None),
            AppError::BadRequest(msg) => Response::bad_request(msg.clone()),
            AppError::Query(rejection) => Response::bad_request(rejection.body_text()),
            AppError::Validation { name, source } => Response::validation_error(source, name),
            AppError::NotFound(msg) => Response::not_found(msg.clone()),
            AppError::InternalError(msg) => internal(msg),
        }
    }
}

/// Log the cause and answer with a sanitized 500.
fn internal(cause: &dyn std::fmt::Display) -> Response {
    tracing::error!(error = %cause, "Internal error");
    Response::new(INTERNAL_SERVER_ERROR, "internal server error", None)
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        Reply(self.to_envelope()).into_response()
    }
}
