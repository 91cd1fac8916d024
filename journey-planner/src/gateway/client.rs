//! `reqwest`-backed gateway.

use tracing::debug;

use super::error::GatewayError;
use super::{Gateway, GatewayResponse};

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Gateway that performs real HTTP requests.
///
/// No timeout is configured beyond the `reqwest` default.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
}

impl HttpGateway {
    /// Create a new HTTP gateway.
    pub fn new() -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self { http })
    }
}

impl Gateway for HttpGateway {
    async fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<GatewayResponse, GatewayError> {
        debug!(url, params = query.len(), "GET");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "response");

        let body = response.text().await?;

        Ok(GatewayResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_creation() {
        assert!(HttpGateway::new().is_ok());
    }

    #[test]
    fn user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("journey-planner/"));
    }
}
