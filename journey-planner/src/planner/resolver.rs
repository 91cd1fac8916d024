//! Station name resolution.
//!
//! Turns what the user typed into the stop id the journey endpoint wants.
//! TfL's search is fuzzy and ranks its candidates, so the first candidate is
//! taken as the answer; there is no disambiguation step.

use tracing::debug;

use crate::domain::StopPointMatch;
use crate::gateway::{Gateway, QueryParams};
use crate::tfl::{self, StopPointSearchResponse};

use super::config::PlannerConfig;
use super::error::PlannerError;
use super::response::decode;

/// Resolves station names through the TfL search endpoint.
#[derive(Debug)]
pub struct StationResolver<'a, G> {
    gateway: &'a G,
    config: &'a PlannerConfig,
}

impl<'a, G: Gateway> StationResolver<'a, G> {
    pub fn new(gateway: &'a G, config: &'a PlannerConfig) -> Self {
        Self { gateway, config }
    }

    /// Search for stops matching `name`, restricted to the configured mode.
    ///
    /// Candidates come back in TfL's ranking order.
    pub async fn search(&self, name: &str) -> Result<Vec<StopPointMatch>, PlannerError> {
        let query: QueryParams = vec![
            (tfl::APP_KEY, self.config.app_key.clone()),
            (tfl::QUERY, name.to_string()),
            (tfl::MODES, self.config.mode.to_string()),
        ];

        let response = self
            .gateway
            .get(&self.config.stop_point_url, &query)
            .await?;
        let search: StopPointSearchResponse = decode(response)?;

        Ok(search
            .matches
            .into_iter()
            .map(StopPointMatch::from)
            .collect())
    }

    /// Resolve `name` to an external stop id.
    ///
    /// With `strict`, the first candidate must also be in the
    /// [`StationCatalog`](crate::domain::StationCatalog).
    pub async fn resolve(&self, name: &str, strict: bool) -> Result<String, PlannerError> {
        let candidate = self
            .search(name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| PlannerError::NotFound {
                name: name.to_string(),
            })?;

        if strict && !candidate.is_supported() {
            debug!(
                name,
                candidate = %candidate.name,
                catalog_id = ?candidate.catalog_id,
                "candidate not in catalog"
            );
            return Err(PlannerError::UnsupportedStation {
                name: name.to_string(),
            });
        }

        debug!(name, id = %candidate.id, candidate = %candidate.name, "resolved station");
        Ok(candidate.id)
    }
}
