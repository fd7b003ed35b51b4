/// Message carried by [`EnvelopeError::Encoding`]; producers and consumers
/// both match on this exact text.
pub const MISSING_COLLECTION_MESSAGE: &str = "data provided, type cannot be empty";

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// Content was supplied without a collection name to file it under.
    #[error("data provided, type cannot be empty")]
    Encoding,

    /// The envelope carries no payload, or a payload without a collection name.
    #[error("invalid data provided: {0}")]
    Extraction(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Failure reported by the credential verifier at the boundary of this crate.
///
/// Verification itself lives with the transport adapter; only the taxonomy
/// is shared so that envelopes can be built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TokenError {
    #[error("token malformed")]
    Malformed,

    #[error("token expired or not yet valid")]
    ExpiredOrNotYetValid,

    #[error("invalid token")]
    Invalid,

    #[error("invalid token claims")]
    ClaimsInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_message_is_stable() {
        assert_eq!(EnvelopeError::Encoding.to_string(), MISSING_COLLECTION_MESSAGE);
    }

    #[test]
    fn token_error_messages() {
        assert_eq!(TokenError::Malformed.to_string(), "token malformed");
        assert_eq!(
            TokenError::ExpiredOrNotYetValid.to_string(),
            "token expired or not yet valid"
        );
        assert_eq!(TokenError::Invalid.to_string(), "invalid token");
        assert_eq!(TokenError::ClaimsInvalid.to_string(), "invalid token claims");
    }
}
