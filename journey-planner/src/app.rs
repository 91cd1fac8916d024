//! Interactive session: prompt, resolve, query, print.
//!
//! Fields are collected in a fixed order (from, to, via, excluding) and each
//! is resolved as soon as it is entered, so a bad origin fails before the
//! user is asked for a destination. Nothing here catches errors; the first
//! failure ends the session and is returned to `main`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::gateway::Gateway;
use crate::planner::{ConfigError, JourneyPlanner, PlannerConfig, PlannerError, StationResolver};
use crate::present::{ItineraryRequest, present};

const BANNER: &str = "\
TfL Journey Planner Client
--------------------------

Please enter a start and a destination station for a list of stations and lines that the train will go through to reach the required destination. It will also display any connections that will need to be made.
Note that only a central subset of London Underground stations may be entered at this time.

";

const SEPARATOR: &str = "--------------------------\n\n";

/// Top-level error for a run of the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Planner(#[from] PlannerError),
}

/// One of the four station inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    From,
    To,
    Via,
    Excluding,
}

impl Field {
    fn prompt(self) -> &'static str {
        match self {
            Field::From => "From station: ",
            Field::To => "\nTo station: ",
            Field::Via => "\nVia (optional): ",
            Field::Excluding => "\nExcluding (optional): ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::From => "from",
            Field::To => "to",
            Field::Via => "via",
            Field::Excluding => "excluding",
        }
    }

    /// Whether this field's match must be in the station catalog.
    ///
    /// An excluded station only has to exist.
    pub fn is_strict(self) -> bool {
        !matches!(self, Field::Excluding)
    }
}

/// Station names supplied up front (e.g. on the command line).
///
/// A supplied field is not prompted for. Once both `from` and `to` are
/// supplied, missing optional fields are treated as omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub via: Option<String>,
    pub excluding: Option<String>,
}

impl Inputs {
    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::From => self.from.as_deref(),
            Field::To => self.to.as_deref(),
            Field::Via => self.via.as_deref(),
            Field::Excluding => self.excluding.as_deref(),
        }
    }

    /// Both endpoints supplied, so no prompting is needed.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

/// A station as the user named it, with the stop id it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStation {
    pub name: String,
    pub id: String,
}

/// Drives one query from prompts to printed itinerary.
#[derive(Debug)]
pub struct Session<'a, G, R, W> {
    gateway: &'a G,
    config: &'a PlannerConfig,
    input: R,
    output: W,
}

impl<'a, G, R, W> Session<'a, G, R, W>
where
    G: Gateway,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(gateway: &'a G, config: &'a PlannerConfig, input: R, output: W) -> Self {
        Self {
            gateway,
            config,
            input,
            output,
        }
    }

    /// Run the session, returning how many journeys were printed.
    ///
    /// Zero journeys is a successful run.
    pub async fn run(&mut self, inputs: &Inputs) -> Result<usize, PlannerError> {
        if !inputs.is_complete() {
            self.write(BANNER).await?;
        }

        let resolver = StationResolver::new(self.gateway, self.config);

        let from = self.required(&resolver, Field::From, inputs).await?;
        let to = self.required(&resolver, Field::To, inputs).await?;
        let via = self.optional(&resolver, Field::Via, inputs).await?;
        let excluding = self.optional(&resolver, Field::Excluding, inputs).await?;

        if !inputs.is_complete() {
            self.write(SEPARATOR).await?;
        }

        let journeys = JourneyPlanner::new(self.gateway, self.config)
            .query_journey(
                &from.id,
                &to.id,
                via.as_ref().map(|s| s.id.as_str()),
                excluding.as_ref().map(|s| s.id.as_str()),
            )
            .await?;
        info!(from = %from.id, to = %to.id, journeys = journeys.len(), "journey query complete");

        let text = present(
            &journeys,
            ItineraryRequest {
                from: &from.name,
                to: &to.name,
                via: via.as_ref().map(|s| s.name.as_str()),
                excluding: excluding.as_ref().map(|s| s.name.as_str()),
            },
        );
        self.write(&text).await?;

        Ok(journeys.len())
    }

    async fn required(
        &mut self,
        resolver: &StationResolver<'_, G>,
        field: Field,
        inputs: &Inputs,
    ) -> Result<ResolvedStation, PlannerError> {
        let name = self
            .collect(field, inputs)
            .await?
            .ok_or(PlannerError::BlankInput {
                field: field.name(),
            })?;
        let id = resolver.resolve(&name, field.is_strict()).await?;
        Ok(ResolvedStation { name, id })
    }

    async fn optional(
        &mut self,
        resolver: &StationResolver<'_, G>,
        field: Field,
        inputs: &Inputs,
    ) -> Result<Option<ResolvedStation>, PlannerError> {
        let Some(name) = self.collect(field, inputs).await? else {
            return Ok(None);
        };
        let id = resolver.resolve(&name, field.is_strict()).await?;
        Ok(Some(ResolvedStation { name, id }))
    }

    /// Read a field, from `inputs` if supplied there, otherwise by prompting.
    /// Blank means absent.
    async fn collect(
        &mut self,
        field: Field,
        inputs: &Inputs,
    ) -> Result<Option<String>, PlannerError> {
        if let Some(value) = inputs.get(field) {
            return Ok(non_blank(value));
        }
        if inputs.is_complete() {
            return Ok(None);
        }

        self.write(field.prompt()).await?;

        let mut line = String::new();
        self.input.read_line(&mut line).await?;
        Ok(non_blank(&line))
    }

    async fn write(&mut self, text: &str) -> Result<(), PlannerError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
