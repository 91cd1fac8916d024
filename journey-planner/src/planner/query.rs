//! Journey queries.
//!
//! The `mode` parameter TfL accepts does not keep walking-only options out
//! of the results, so every response goes through [`filter_mode`] before
//! anything else sees it.

use tracing::debug;

use crate::domain::{Journey, Mode};
use crate::gateway::{Gateway, QueryParams};
use crate::tfl::{self, JourneyResultsResponse};

use super::config::PlannerConfig;
use super::error::PlannerError;
use super::response::decode;

/// Keep journeys with at least one leg on `mode`.
pub fn filter_mode(journeys: Vec<Journey>, mode: &Mode) -> Vec<Journey> {
    journeys
        .into_iter()
        .filter(|journey| journey.uses_mode(mode))
        .collect()
}

/// Drop journeys passing through the stop `excluded`.
pub fn filter_excluding(journeys: Vec<Journey>, excluded: &str) -> Vec<Journey> {
    journeys
        .into_iter()
        .filter(|journey| !journey.calls_at(excluded))
        .collect()
}

/// Plans journeys between resolved stop ids.
#[derive(Debug)]
pub struct JourneyPlanner<'a, G> {
    gateway: &'a G,
    config: &'a PlannerConfig,
}

impl<'a, G: Gateway> JourneyPlanner<'a, G> {
    pub fn new(gateway: &'a G, config: &'a PlannerConfig) -> Self {
        Self { gateway, config }
    }

    /// Request journeys from `from` to `to`, optionally via a stop, and
    /// optionally avoiding one.
    ///
    /// An empty result is not an error: it means no journey on the
    /// configured mode satisfies the constraints.
    pub async fn query_journey(
        &self,
        from: &str,
        to: &str,
        via: Option<&str>,
        excluding: Option<&str>,
    ) -> Result<Vec<Journey>, PlannerError> {
        let url = self.config.journey_endpoint(from, to);

        let mut query: QueryParams = vec![
            (tfl::APP_KEY, self.config.app_key.clone()),
            (tfl::MODE, self.config.mode.to_string()),
        ];
        if let Some(via) = via.filter(|v| !v.is_empty()) {
            query.push((tfl::VIA, via.to_string()));
        }

        let response = self.gateway.get(&url, &query).await?;
        let results: JourneyResultsResponse = decode(response)?;

        let journeys: Vec<Journey> = results.journeys.into_iter().map(Journey::from).collect();
        let received = journeys.len();

        let mut journeys = filter_mode(journeys, &self.config.mode);
        debug!(
            received,
            kept = journeys.len(),
            mode = %self.config.mode,
            "applied mode filter"
        );

        if let Some(excluded) = excluding.filter(|e| !e.is_empty()) {
            let before = journeys.len();
            journeys = filter_excluding(journeys, excluded);
            debug!(before, kept = journeys.len(), excluded, "applied exclusion filter");
        }

        Ok(journeys)
    }
}
