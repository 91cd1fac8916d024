//! TfL Unified API wire format.
//!
//! Two endpoints are used:
//! - `StopPoint/Search` to turn a typed name into a stop id
//! - `Journey/JourneyResults/{from}/to/{to}` to plan a route
//!
//! The DTOs here only carry the fields the planner reads; everything else
//! in the (large) TfL payloads is ignored by serde.

mod convert;
mod types;

pub use types::{
    InstructionDto, JourneyDto, JourneyResultsResponse, LegDto, ModeDto, PathDto, PointDto,
    StopPointDto, StopPointMatchDto, StopPointSearchResponse,
};

/// Query parameter carrying the API key.
pub const APP_KEY: &str = "app_key";
/// Free-text query parameter for station search.
pub const QUERY: &str = "query";
/// Mode restriction for station search.
pub const MODES: &str = "modes";
/// Mode restriction for journey planning.
pub const MODE: &str = "mode";
/// Optional intermediate station for journey planning.
pub const VIA: &str = "via";
