//! Mock gateway for testing without API access.
//!
//! Serves canned responses keyed by URL (and optionally one query
//! parameter) and records every request it receives.

use std::sync::Mutex;

use super::error::GatewayError;
use super::{Gateway, GatewayResponse};

/// A request seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of the first query parameter named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
struct Route {
    url: String,
    param: Option<(String, String)>,
    response: GatewayResponse,
}

impl Route {
    fn matches(&self, url: &str, query: &[(&'static str, String)]) -> bool {
        if self.url != url {
            return false;
        }
        match &self.param {
            None => true,
            Some((key, value)) => query.iter().any(|(k, v)| k == key && v == value),
        }
    }
}

/// Gateway that answers from a fixed routing table.
///
/// Routes are tried in registration order; the first match wins.
/// A request nothing matches fails with [`GatewayError::Unrouted`].
#[derive(Debug, Default)]
pub struct MockGateway {
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request to `url` with `response`.
    pub fn on(mut self, url: impl Into<String>, response: GatewayResponse) -> Self {
        self.routes.push(Route {
            url: url.into(),
            param: None,
            response,
        });
        self
    }

    /// Answer requests to `url` carrying `key=value` with `response`.
    pub fn on_param(
        mut self,
        url: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        response: GatewayResponse,
    ) -> Self {
        self.routes.push(Route {
            url: url.into(),
            param: Some((key.into(), value.into())),
            response,
        });
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, url: &str, query: &[(&'static str, String)]) {
        let request = RecordedRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        };
        match self.requests.lock() {
            Ok(mut guard) => guard.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }
}

impl Gateway for MockGateway {
    async fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<GatewayResponse, GatewayError> {
        self.record(url, query);

        self.routes
            .iter()
            .find(|route| route.matches(url, query))
            .map(|route| route.response.clone())
            .ok_or_else(|| GatewayError::Unrouted(url.to_string()))
    }
}
