//! Gateway error types.

/// Errors from the transport layer itself.
///
/// A non-success status is *not* an error here; it comes back as a
/// [`GatewayResponse`](super::GatewayResponse) for the caller to interpret.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// HTTP request failed (connection refused, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway could not be constructed
    #[error("invalid gateway configuration: {0}")]
    Config(String),

    /// No canned response matched a request (mock only)
    #[error("no canned response for {0}")]
    Unrouted(String),
}
