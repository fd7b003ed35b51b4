//! Minimal transport contract an envelope is written to.
//!
//! Adapters for concrete HTTP stacks implement [`ResponseSink`];
//! [`RecordingSink`] keeps everything in memory.

use crate::types::HttpCode;

pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, code: HttpCode);

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()>;
}

/// In-memory sink that records the status line, headers and body.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub status: Option<HttpCode>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl ResponseSink for RecordingSink {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn set_status(&mut self, code: HttpCode) {
        self.status = Some(code);
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.body.extend_from_slice(body);
        Ok(())
    }
}
