//! Writing envelopes onto Axum responses.
//!
//! Handlers return [`Reply`] around any [`Responder`]; the envelope's own
//! write contract fills an [`AxumSink`], which becomes the HTTP response.
//!
//! ```ignore
//! async fn list(...) -> Reply<Response> {
//!     Reply(Response::new(200, "", Some(Payload::new("widgets", items))))
//! }
//! ```

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use respond_core::types::INTERNAL_SERVER_ERROR;
use respond_core::{Responder, Response, ResponseSink};

/// An envelope on its way out of a handler.
#[derive(Debug)]
pub struct Reply<R>(pub R);

impl<R: Responder> IntoResponse for Reply<R> {
    fn into_response(self) -> axum::response::Response {
        let mut sink = AxumSink::default();
        match self.0.write_to(&mut sink) {
            Ok(()) => sink.into_response(),
            Err(err) => {
                tracing::error!(error = %err, code = self.0.code(), "Failed to write response envelope");
                internal_error_response()
            }
        }
    }
}

/// Plain 500 envelope used when the intended one could not be written.
fn internal_error_response() -> axum::response::Response {
    let mut sink = AxumSink::default();
    match Response::new(INTERNAL_SERVER_ERROR, "internal server error", None).write_to(&mut sink) {
        Ok(()) => sink.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// [`ResponseSink`] that buffers into the parts of an Axum response.
#[derive(Debug, Default)]
pub struct AxumSink {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseSink for AxumSink {
    fn set_header(&mut self, name: &str, value: &str) {
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "Dropping invalid response header"),
        }
    }

    fn set_status(&mut self, code: u16) {
        self.status = StatusCode::from_u16(code).unwrap_or_else(|_| {
            tracing::warn!(code, "Invalid HTTP status code in envelope, using 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.body.extend_from_slice(body);
        Ok(())
    }
}

impl IntoResponse for AxumSink {
    fn into_response(self) -> axum::response::Response {
        let mut response = axum::response::Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
