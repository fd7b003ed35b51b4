//! RS256 access-token verification.
//!
//! Tokens are issued elsewhere; this service only holds the issuer's public
//! key. Every failure is folded into one of the four [`TokenError`] kinds so
//! callers never have to inspect `jsonwebtoken` internals.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use respond_core::{AuthStatusMap, TokenError};
use serde::{Deserialize, Serialize};

/// The API consumer a token was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub grants: Vec<String>,
}

impl Consumer {
    pub fn has_grant(&self, grant: &str) -> bool {
        self.grants.iter().any(|g| g == grant)
    }
}

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub consumer: Consumer,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Token verification settings.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// PEM file holding the issuer's RSA public key.
    pub public_key_path: PathBuf,
    /// Response code for each kind of token failure.
    pub status_codes: AuthStatusMap,
}

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("cannot read public key: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse public key: {0}")]
    Pem(#[from] jsonwebtoken::errors::Error),
}

impl JwtConfig {
    /// Load token settings from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_PUBLIC_KEY_PATH`    | **yes**  | --      |
    /// | `AUTH_STATUS_MALFORMED`  | no       | `422`   |
    /// | `AUTH_STATUS_EXPIRED`    | no       | `401`   |
    /// | `AUTH_STATUS_INVALID`    | no       | `401`   |
    /// | `AUTH_STATUS_CLAIMS`     | no       | `401`   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_PUBLIC_KEY_PATH` is not set or a status override is not
    /// a valid u16.
    pub fn from_env() -> Self {
        let public_key_path = std::env::var("JWT_PUBLIC_KEY_PATH")
            .expect("JWT_PUBLIC_KEY_PATH must be set in the environment")
            .into();

        let defaults = AuthStatusMap::default();
        let status_codes = AuthStatusMap {
            malformed: status_override("AUTH_STATUS_MALFORMED", defaults.malformed),
            expired_or_not_yet_valid: status_override(
                "AUTH_STATUS_EXPIRED",
                defaults.expired_or_not_yet_valid,
            ),
            invalid: status_override("AUTH_STATUS_INVALID", defaults.invalid),
            claims_invalid: status_override("AUTH_STATUS_CLAIMS", defaults.claims_invalid),
        };

        Self {
            public_key_path,
            status_codes,
        }
    }

    /// Read and parse the configured public key.
    pub fn decoding_key(&self) -> Result<DecodingKey, KeyError> {
        let pem = std::fs::read(&self.public_key_path)?;
        Ok(DecodingKey::from_rsa_pem(&pem)?)
    }
}

fn status_override(var: &str, default: u16) -> u16 {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid u16")),
        Err(_) => default,
    }
}

/// Check the signature and validity window of `raw`, returning its claims.
///
/// Only RS256 is accepted; a token signed with any other algorithm is
/// [`TokenError::Invalid`].
pub fn verify_token(key: &DecodingKey, raw: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_nbf = true;

    decode::<Claims>(raw, key, &validation)
        .map(|data| data.claims)
        .map_err(|err| {
            let kind = classify(err.kind());
            tracing::debug!(error = %err, ?kind, "Token rejected");
            kind
        })
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => {
            TokenError::Malformed
        }
        ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => {
            TokenError::ExpiredOrNotYetValid
        }
        ErrorKind::Json(_)
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject => TokenError::ClaimsInvalid,
        _ => TokenError::Invalid,
    }
}
