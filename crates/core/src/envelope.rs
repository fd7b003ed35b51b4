//! The standard response envelope.
//!
//! Every endpoint answers with the same wrapper:
//!
//! ```text
//! {
//!     "status": "ok" | "fail",
//!     "code": <http code>,
//!     "message": "<optional message>",
//!     "data": { "<collection>": ... },    // omitted when absent
//!     ...extras                           // e.g. "pagination"
//! }
//! ```
//!
//! Plain and paginated responses share one implementation: [`Envelope`] is
//! generic over a flattened extras block. [`Response`] carries none,
//! [`PaginatedResponse`](crate::pagination::PaginatedResponse) carries the
//! pagination summary.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EnvelopeError;
use crate::payload::Payload;
use crate::sink::ResponseSink;
use crate::types::{HttpCode, BAD_REQUEST, CONTENT_TYPE_JSON, NO_CONTENT, OK};

/// Outcome reported in the `status` field.
///
/// Encoders only ever produce `ok` or `fail`. Decoders keep whatever string
/// the producer sent, so foreign values survive as [`Status::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Fail,
    Other(String),
}

impl Status {
    /// `ok` for codes in `[200, 400)`, `fail` for everything else.
    pub fn from_code(code: HttpCode) -> Self {
        if (OK..BAD_REQUEST).contains(&code) {
            Status::Ok
        } else {
            Status::Fail
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Ok => "ok",
            Status::Fail => "fail",
            Status::Other(s) => s,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "ok" => Status::Ok,
            "fail" => Status::Fail,
            _ => Status::Other(raw),
        })
    }
}

/// Extras block for envelopes that carry nothing beyond the common fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoExtras {}

/// Response envelope, generic over its trailing extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<X = NoExtras> {
    #[serde(default, deserialize_with = "null_as_default")]
    status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    code: HttpCode,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    #[serde(default, skip_serializing_if = "payload_absent")]
    data: Option<Payload>,
    #[serde(flatten)]
    extras: X,
}

/// A plain envelope without pagination.
pub type Response = Envelope<NoExtras>;

/// Metadata sent as `null` reads the same as metadata left out.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn payload_absent(data: &Option<Payload>) -> bool {
    data.as_ref().map_or(true, Payload::is_empty)
}

impl Response {
    /// Build a response, deriving `status` from `code`.
    ///
    /// ```
    /// use respond_core::{Payload, Response, Status};
    ///
    /// let resp = Response::new(200, "", Some(Payload::new("things", serde_json::json!([]))));
    /// assert_eq!(resp.status(), &Status::Ok);
    /// ```
    pub fn new(code: HttpCode, message: impl Into<String>, data: Option<Payload>) -> Self {
        Self::with_extras(code, message, data, NoExtras {})
    }
}

impl<X> Envelope<X> {
    /// Build an envelope carrying the given extras, deriving `status` from `code`.
    pub fn with_extras(
        code: HttpCode,
        message: impl Into<String>,
        data: Option<Payload>,
        extras: X,
    ) -> Self {
        Self {
            status: Status::from_code(code),
            code,
            message: message.into(),
            data,
            extras,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn code(&self) -> HttpCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }

    pub fn extras(&self) -> &X {
        &self.extras
    }

    /// Pull the collection named `key` out of the payload.
    ///
    /// Returns `Ok(None)` when the payload holds a different collection.
    /// Fails when there is no payload or it has no collection name.
    pub fn extract<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, EnvelopeError> {
        let map = self
            .data
            .as_ref()
            .and_then(Payload::as_map)
            .ok_or_else(|| EnvelopeError::Extraction(describe(self.data.as_ref())))?;

        match map.into_iter().find(|(name, _)| name == key) {
            Some((_, value)) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Like [`extract`](Self::extract), decoding into an existing value.
    ///
    /// `dst` is left untouched on error or when `key` is not present.
    pub fn extract_into<T: DeserializeOwned>(
        &self,
        key: &str,
        dst: &mut T,
    ) -> Result<(), EnvelopeError> {
        if let Some(value) = self.extract(key)? {
            *dst = value;
        }
        Ok(())
    }
}

impl<X: Serialize> Envelope<X> {
    /// Serialize the whole envelope.
    pub fn encode(&self) -> Result<Vec<u8>, EnvelopeError> {
        if let Some(data) = &self.data {
            data.check_encodable()?;
        }
        Ok(serde_json::to_vec(self)?)
    }

    /// Write the envelope as a JSON HTTP response.
    ///
    /// A `204 No Content` never gets a body, whatever the payload.
    pub fn write_to<S: ResponseSink>(&self, sink: &mut S) -> Result<(), EnvelopeError> {
        sink.set_header("Content-Type", CONTENT_TYPE_JSON);
        sink.set_status(self.code);

        if self.code == NO_CONTENT {
            return Ok(());
        }

        let body = self.encode()?;
        sink.write_body(&body)?;
        Ok(())
    }
}

impl<X: DeserializeOwned> Envelope<X> {
    /// Decode an envelope from JSON, trusting `status` as sent.
    pub fn decode(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

fn describe(data: Option<&Payload>) -> String {
    match data {
        Some(payload) => payload.to_string(),
        None => "no payload".to_string(),
    }
}

/// Common behaviour of every envelope kind, for code that only needs to
/// write or inspect a response.
pub trait Responder {
    fn code(&self) -> HttpCode;

    fn write_to<S: ResponseSink>(&self, sink: &mut S) -> Result<(), EnvelopeError>;

    fn extract<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, EnvelopeError>;
}

impl<X: Serialize> Responder for Envelope<X> {
    fn code(&self) -> HttpCode {
        self.code
    }

    fn write_to<S: ResponseSink>(&self, sink: &mut S) -> Result<(), EnvelopeError> {
        Envelope::write_to(self, sink)
    }

    fn extract<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, EnvelopeError> {
        Envelope::extract(self, key)
    }
}
