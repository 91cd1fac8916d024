//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::app::Inputs;
use crate::domain::Mode;
use crate::planner::{ConfigError, PlannerConfig};

/// TfL journey planner for central London Underground stations.
///
/// Without --from/--to the planner asks for each station in turn.
#[derive(Debug, Parser)]
#[command(name = "journey-planner", version)]
pub struct Cli {
    /// JSON settings file (defaults to ./appsettings.json when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TfL application key
    #[arg(long, env = "TFL_APP_KEY", hide_env_values = true)]
    pub app_key: Option<String>,

    /// Journey planner endpoint base URL
    #[arg(long, env = "TFL_JOURNEY_URL")]
    pub journey_url: Option<String>,

    /// Station search endpoint URL
    #[arg(long, env = "TFL_STOP_POINT_URL")]
    pub stop_point_url: Option<String>,

    /// Transport mode to plan on
    #[arg(long, env = "TFL_MODE")]
    pub mode: Option<String>,

    /// Origin station
    #[arg(long)]
    pub from: Option<String>,

    /// Destination station
    #[arg(long)]
    pub to: Option<String>,

    /// Station to travel via
    #[arg(long)]
    pub via: Option<String>,

    /// Station to avoid
    #[arg(long)]
    pub excluding: Option<String>,

    /// Print the supported stations and exit
    #[arg(long)]
    pub list_stations: bool,
}

impl Cli {
    /// Settings file, then environment and flags on top.
    pub fn planner_config(&self) -> Result<PlannerConfig, ConfigError> {
        let mut config = PlannerConfig::load(self.config.as_deref())?;

        if let Some(app_key) = &self.app_key {
            config.app_key = app_key.clone();
        }
        if let Some(url) = &self.journey_url {
            config.journey_url = url.clone();
        }
        if let Some(url) = &self.stop_point_url {
            config.stop_point_url = url.clone();
        }
        if let Some(mode) = &self.mode {
            config.mode = Mode::new(mode.clone());
        }

        Ok(config)
    }

    pub fn inputs(&self) -> Inputs {
        Inputs {
            from: self.from.clone(),
            to: self.to.clone(),
            via: self.via.clone(),
            excluding: self.excluding.clone(),
        }
    }
}
