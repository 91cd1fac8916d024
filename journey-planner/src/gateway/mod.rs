//! HTTP transport for the TfL API.
//!
//! The planner never talks to `reqwest` directly. It is handed a
//! [`Gateway`] and issues exactly one GET per call, so tests can swap in
//! [`MockGateway`] and inspect what would have gone over the wire.

mod client;
mod error;
mod mock;

use std::future::Future;

pub use client::HttpGateway;
pub use error::GatewayError;
pub use mock::{MockGateway, RecordedRequest};

/// Query parameters for a single request, in the order they are sent.
pub type QueryParams = Vec<(&'static str, String)>;

/// A raw HTTP response, before any status interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase for the status, if one is known.
    pub reason: Option<String>,
    /// Response body as text.
    pub body: String,
}

impl GatewayResponse {
    /// A response with the canonical reason phrase for `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string);
        Self {
            status,
            reason,
            body: body.into(),
        }
    }

    /// Shorthand for a 200 response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a GET request.
///
/// Implementations make one attempt per call: no retries, no caching.
pub trait Gateway {
    fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<GatewayResponse, GatewayError>> + Send;
}
