//! Planner error types.
//!
//! The `Display` text of each variant is exactly what the user sees before
//! the process exits with a failure status.

use crate::gateway::GatewayError;

/// Status TfL returns for both rate limiting and a bad app key.
pub const RATE_LIMIT_STATUS: u16 = 429;

/// Errors from resolving stations and querying journeys.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// A required station field was left empty
    #[error(
        "Error: The input station cannot be null. Please check the full list of supported Underground stations and try again."
    )]
    BlankInput { field: &'static str },

    /// Station search returned no candidates
    #[error(
        "Error: {name} is not a valid Underground station. Please check the full list of supported Underground stations and try again."
    )]
    NotFound { name: String },

    /// First candidate is not in the station catalog
    #[error(
        "Error: {name} is not part of this Journey Planner application yet. Please check the full list of supported Underground stations and try again."
    )]
    UnsupportedStation { name: String },

    /// 429 from TfL, which it also sends for an invalid or expired key
    #[error(
        "Error: Too many API requests and/or App Key supplied is invalid and may have expired and/or the API URL is invalid. Please check the status of your App Key and the API URL on the TfL API Developer Portal."
    )]
    RateLimitOrAuth,

    /// Any other non-success status
    #[error("Error: API request failed. Reason: {reason}. ErrorCode: {status}.")]
    Api { reason: String, status: u16 },

    /// Response body did not match the expected shape
    #[error("Error: API response could not be read: {message}")]
    Decode { message: String },

    /// The request never got a response
    #[error("Error: API request failed: {0}")]
    Transport(#[from] GatewayError),

    /// Reading input or writing output failed
    #[error("Error: console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    /// Map a non-success status to its error.
    pub fn from_status(status: u16, reason: Option<&str>) -> Self {
        if status == RATE_LIMIT_STATUS {
            return PlannerError::RateLimitOrAuth;
        }

        PlannerError::Api {
            reason: reason.unwrap_or("Unknown").to_string(),
            status,
        }
    }
}
