//! Shared handling of gateway responses.

use serde::de::DeserializeOwned;

use crate::gateway::GatewayResponse;

use super::error::PlannerError;

/// Decode a successful response body, or map the status to an error.
pub(crate) fn decode<T: DeserializeOwned>(response: GatewayResponse) -> Result<T, PlannerError> {
    if !response.is_success() {
        return Err(PlannerError::from_status(
            response.status,
            response.reason.as_deref(),
        ));
    }

    serde_json::from_str(&response.body).map_err(|e| PlannerError::Decode {
        message: e.to_string(),
    })
}
