//! Paginated envelopes.
//!
//! Page math is not done here. A [`PaginationSource`] hands over a finished
//! [`PaginationSummary`] when the envelope is built, and the envelope only
//! carries it to the wire.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::payload::Payload;
use crate::types::HttpCode;

/// Pre-computed pagination block, serialized under `"pagination"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSummary {
    pub per_page: u64,
    pub offset: u64,
    pub total: u64,
    pub last_page: u64,
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

/// Anything able to summarize the page that is being returned.
pub trait PaginationSource {
    fn summary(&self) -> PaginationSummary;
}

impl PaginationSource for PaginationSummary {
    fn summary(&self) -> PaginationSummary {
        self.clone()
    }
}

/// Extras block of a paginated envelope.
///
/// Always written, as `null` when a decoded envelope did not carry one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationExtras {
    #[serde(default)]
    pub pagination: Option<PaginationSummary>,
}

pub type PaginatedResponse = Envelope<PaginationExtras>;

impl PaginatedResponse {
    /// Build a paginated response, deriving `status` from `code`.
    pub fn paginated(
        source: &impl PaginationSource,
        code: HttpCode,
        message: impl Into<String>,
        data: Option<Payload>,
    ) -> Self {
        let extras = PaginationExtras {
            pagination: Some(source.summary()),
        };
        Self::with_extras(code, message, data, extras)
    }

    pub fn pagination(&self) -> Option<&PaginationSummary> {
        self.extras().pagination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::{json, Map, Value};

    use super::*;
    use crate::envelope::Status;
    use crate::error::EnvelopeError;
    use crate::sink::RecordingSink;

    fn summary() -> PaginationSummary {
        PaginationSummary {
            per_page: 1,
            offset: 0,
            total: 2,
            last_page: 2,
            current_page: 1,
            next_page: Some(2),
            prev_page: None,
        }
    }

    fn prepared_data() -> Payload {
        Payload::new("tests", json!({"tests": "ok", "language": "golang"}))
    }

    #[test]
    fn paginated_derives_status_and_keeps_summary() {
        let resp = PaginatedResponse::paginated(&summary(), 200, "", Some(prepared_data()));
        assert_eq!(resp.status(), &Status::Ok);
        assert_eq!(resp.pagination(), Some(&summary()));
    }

    #[test]
    fn paginated_encodes_pagination_after_data() {
        let resp = PaginatedResponse::paginated(&summary(), 200, "", Some(prepared_data()));
        let text = String::from_utf8(resp.encode().unwrap()).unwrap();
        assert!(text.starts_with(r#"{"status":"ok","code":200,"message":"","data":{"tests":"#));
        assert!(text.ends_with(
            r#""pagination":{"per_page":1,"offset":0,"total":2,"last_page":2,"current_page":1,"next_page":2,"prev_page":null}}"#
        ));
    }

    #[test]
    fn paginated_decode_round_trip() {
        let resp = PaginatedResponse::paginated(&summary(), 200, "", Some(prepared_data()));
        let decoded = PaginatedResponse::decode(&resp.encode().unwrap()).unwrap();
        assert_eq!(decoded, resp);
    }

    #[test]
    fn paginated_decode_without_pagination() {
        let decoded =
            PaginatedResponse::decode(br#"{"status":"ok","code":200,"message":""}"#).unwrap();
        assert!(decoded.pagination().is_none());
    }

    #[test]
    fn paginated_extract() {
        let resp = PaginatedResponse::paginated(&summary(), 200, "", Some(prepared_data()));
        let dst: Option<Map<String, Value>> = resp.extract("tests").unwrap();
        assert!(dst.is_some());

        let broken = PaginatedResponse::paginated(
            &summary(),
            200,
            "",
            Some(Payload::unclassified(json!({"tests": "ok"}))),
        );
        assert_matches!(
            broken.extract::<Value>("tests"),
            Err(EnvelopeError::Extraction(_))
        );
    }

    #[test]
    fn paginated_204_writes_no_body() {
        let resp = PaginatedResponse::paginated(&summary(), 204, "", Some(prepared_data()));
        let mut sink = RecordingSink::new();
        resp.write_to(&mut sink).unwrap();
        assert_eq!(sink.status, Some(204));
        assert!(sink.body.is_empty());
    }
}
