//! Canned failure responses for the error conditions every service hits.

use std::fmt::Display;

use crate::envelope::Response;
use crate::types::{BAD_REQUEST, CONFLICT, INTERNAL_SERVER_ERROR, NOT_FOUND, UNPROCESSABLE_ENTITY};

impl Response {
    /// 400 Bad Request with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(BAD_REQUEST, msg, None)
    }

    /// 422 for request bodies that are not valid JSON or carry values of the
    /// wrong type.
    pub fn json_error(err: impl Display) -> Self {
        Self::new(UNPROCESSABLE_ENTITY, format!("json error: {err}"), None)
    }

    /// 422 naming the parameter that was missing or invalid.
    pub fn param_error(name: &str) -> Self {
        Self::new(
            UNPROCESSABLE_ENTITY,
            format!("invalid or missing parameter: {name}"),
            None,
        )
    }

    /// 422 naming the validator that rejected the input.
    pub fn validation_error(err: impl Display, name: &str) -> Self {
        Self::new(
            UNPROCESSABLE_ENTITY,
            format!("validation error on {name}: {err}"),
            None,
        )
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(NOT_FOUND, msg, None)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(CONFLICT, msg, None)
    }

    /// 500 for a storage failure.
    pub fn db_error(err: impl Display) -> Self {
        Self::db_error_context("", err)
    }

    /// 500 for a storage failure, prefixed with caller context.
    ///
    /// An empty context falls back to `db error`.
    pub fn db_error_context(context: &str, err: impl Display) -> Self {
        let context = if context.is_empty() { "db error" } else { context };
        Self::new(INTERNAL_SERVER_ERROR, format!("{context}: {err}"), None)
    }

    pub fn internal_error(err: impl Display) -> Self {
        Self::new(
            INTERNAL_SERVER_ERROR,
            format!("internal server error: {err}"),
            None,
        )
    }
}
