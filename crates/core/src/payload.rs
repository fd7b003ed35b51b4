//! Self-describing payload carried in the envelope's `data` field.
//!
//! A [`Payload`] pairs a collection name with arbitrary JSON content and
//! always serializes as a single-key object:
//!
//! ```text
//! { "<collection-name>": <content> }
//! ```
//!
//! Decoding is deliberately lenient so that responses from producers that do
//! not use this crate can still be consumed. The collection name is inferred
//! from the shape of the incoming value (see [`Payload::classify`]).

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{EnvelopeError, MISSING_COLLECTION_MESSAGE};

/// A named collection of content.
///
/// A payload is *classified* when it has a collection name and
/// *unclassified* otherwise. Only classified payloads can be encoded with
/// content or have data extracted from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    collection: String,
    content: Value,
}

impl Payload {
    pub fn new(collection: impl Into<String>, content: impl Into<Value>) -> Self {
        Self {
            collection: collection.into(),
            content: content.into(),
        }
    }

    /// Wrap content that has no collection name yet.
    pub fn unclassified(content: impl Into<Value>) -> Self {
        Self::new(String::new(), content)
    }

    /// The collection name exactly as supplied or inferred.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn into_content(self) -> Value {
        self.content
    }

    /// A payload is valid when it has a collection name.
    pub fn is_valid(&self) -> bool {
        !self.collection.is_empty()
    }

    /// No name and no meaningful content: serialized as absent.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty() && content_is_empty(&self.content)
    }

    /// Collection name as it appears on the wire: lower-cased, every space
    /// replaced with a hyphen.
    ///
    /// ```
    /// use respond_core::payload::Payload;
    ///
    /// let payload = Payload::new("My Things", serde_json::json!([]));
    /// assert_eq!(payload.normalized_name(), "my-things");
    /// ```
    pub fn normalized_name(&self) -> String {
        self.collection.to_lowercase().replace(' ', "-")
    }

    /// Single-key map view of the payload, or `None` when it is invalid.
    pub fn as_map(&self) -> Option<Map<String, Value>> {
        if !self.is_valid() {
            return None;
        }
        let mut map = Map::with_capacity(1);
        map.insert(self.normalized_name(), self.content.clone());
        Some(map)
    }

    /// Fails when content is present but no collection name was given.
    pub fn check_encodable(&self) -> Result<(), EnvelopeError> {
        if !self.is_valid() && !content_is_empty(&self.content) {
            return Err(EnvelopeError::Encoding);
        }
        Ok(())
    }

    /// Encode the payload to its JSON wire form.
    pub fn encode(&self) -> Result<Vec<u8>, EnvelopeError> {
        self.check_encodable()?;
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a raw `data` value, inferring the collection name.
    ///
    /// Never fails: bytes that are not JSON are logged and yield an
    /// unclassified payload with `null` content.
    pub fn decode(bytes: &[u8]) -> Self {
        let value = match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot decode payload data, continuing without content");
                Value::Null
            }
        };
        Self::classify(value)
    }

    /// Infer the collection name from a decoded value.
    ///
    /// - Anything other than an object stays unclassified.
    /// - An object with exactly one member that is itself an object or an
    ///   array becomes that collection. Scalar siblings are dropped.
    /// - An object with zero or several such members stays unclassified.
    pub fn classify(value: Value) -> Self {
        let mut members = match value {
            Value::Object(members) => members,
            other => return Self::unclassified(other),
        };

        let Some(key) = single_collection_key(&members) else {
            return Self::unclassified(Value::Object(members));
        };

        let content = members.remove(&key).unwrap_or(Value::Null);
        Self {
            collection: key,
            content,
        }
    }
}

/// The key of the only member holding an object or array, if exactly one does.
fn single_collection_key(members: &Map<String, Value>) -> Option<String> {
    let mut keys = members
        .iter()
        .filter(|(_, v)| matches!(v, Value::Object(_) | Value::Array(_)))
        .map(|(k, _)| k);
    match (keys.next(), keys.next()) {
        (Some(key), None) => Some(key.clone()),
        _ => None,
    }
}

fn content_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{:?} {}", self.collection, self.content)
        } else {
            write!(f, "unclassified {}", self.content)
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_map() {
            Some(map) => map.serialize(serializer),
            None if content_is_empty(&self.content) => serializer.serialize_none(),
            None => Err(S::Error::custom(MISSING_COLLECTION_MESSAGE)),
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::classify)
    }
}
