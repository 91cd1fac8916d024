//! Domain types for the journey planner.
//!
//! These are built from a single API response, consumed by the filters and
//! the presenter, and then dropped. Nothing here is cached or shared.

mod journey;
mod leg;
mod mode;
mod station;

pub use journey::Journey;
pub use leg::{Leg, StopPoint};
pub use mode::Mode;
pub use station::{CatalogId, StationCatalog, StopPointMatch};
