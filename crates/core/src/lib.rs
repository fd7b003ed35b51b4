//! Shared response envelope for services.
//!
//! - [`payload`] -- the named-collection `data` codec and collection inference.
//! - [`envelope`] -- the generic envelope, status derivation, extraction and
//!   the write contract.
//! - [`pagination`] -- envelopes carrying a pre-built pagination summary.
//! - [`constructors`] -- canned failure responses.
//! - [`auth`] -- mapping credential failures to response codes.
//! - [`sink`] -- the transport contract envelopes are written to.

pub mod auth;
pub mod constructors;
pub mod envelope;
pub mod error;
pub mod pagination;
pub mod payload;
pub mod sink;
pub mod types;

pub use auth::AuthStatusMap;
pub use envelope::{Envelope, NoExtras, Responder, Response, Status};
pub use error::{EnvelopeError, TokenError};
pub use pagination::{PaginatedResponse, PaginationSource, PaginationSummary};
pub use payload::Payload;
pub use sink::{RecordingSink, ResponseSink};
