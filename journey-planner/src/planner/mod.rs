//! Station resolution and journey queries against the TfL API.
//!
//! Both halves take the [`Gateway`](crate::gateway::Gateway) they talk
//! through as a constructor argument and never catch errors: every failure
//! comes back to the caller as a [`PlannerError`].

mod config;
mod error;
mod query;
mod resolver;
mod response;

pub use config::{
    ConfigError, DEFAULT_JOURNEY_URL, DEFAULT_SETTINGS_FILE, DEFAULT_STOP_POINT_URL,
    PlannerConfig,
};
pub use error::{PlannerError, RATE_LIMIT_STATUS};
pub use query::{JourneyPlanner, filter_excluding, filter_mode};
pub use resolver::StationResolver;
