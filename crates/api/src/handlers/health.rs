use respond_core::{Payload, Response};
use serde_json::json;

use crate::response::Reply;

/// GET /health -- reports the running version under the `health` collection.
pub async fn health_check() -> Reply<Response> {
    let payload = Payload::new(
        "health",
        json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        }),
    );
    Reply(Response::new(200, "", Some(payload)))
}
