pub mod consumer;
pub mod health;

use crate::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("route not found".into())
}
