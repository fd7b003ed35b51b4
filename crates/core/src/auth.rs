//! Turning credential failures into `fail` envelopes.
//!
//! The verifier reports one of four [`TokenError`]s; which HTTP code each one
//! becomes is configuration, held in an [`AuthStatusMap`].

use crate::envelope::Response;
use crate::error::TokenError;
use crate::types::{HttpCode, UNAUTHORIZED, UNPROCESSABLE_ENTITY};

/// HTTP code to answer with for each kind of token failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStatusMap {
    pub malformed: HttpCode,
    pub expired_or_not_yet_valid: HttpCode,
    pub invalid: HttpCode,
    pub claims_invalid: HttpCode,
}

impl Default for AuthStatusMap {
    fn default() -> Self {
        Self {
            malformed: UNPROCESSABLE_ENTITY,
            expired_or_not_yet_valid: UNAUTHORIZED,
            invalid: UNAUTHORIZED,
            claims_invalid: UNAUTHORIZED,
        }
    }
}

impl AuthStatusMap {
    pub fn code_for(&self, err: TokenError) -> HttpCode {
        match err {
            TokenError::Malformed => self.malformed,
            TokenError::ExpiredOrNotYetValid => self.expired_or_not_yet_valid,
            TokenError::Invalid => self.invalid,
            TokenError::ClaimsInvalid => self.claims_invalid,
        }
    }
}

impl Response {
    /// `fail` response for a rejected token, coded through `codes`.
    pub fn token_error(err: TokenError, codes: &AuthStatusMap) -> Self {
        Self::new(codes.code_for(err), err.to_string(), None)
    }
}
