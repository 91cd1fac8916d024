//! Journey legs and stop points.

use super::Mode;

/// A named stop, as TfL identifies it (e.g. `940GZZLUEMB`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPoint {
    /// External identifier. May be empty for points TfL gives no id for.
    pub id: String,
    /// Display name
    pub name: String,
}

impl StopPoint {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One uninterrupted ride on a single mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// Where the leg starts
    pub departure: StopPoint,
    /// Where the leg ends
    pub arrival: StopPoint,
    /// Instruction summary, e.g. "Northern line to Leicester Square"
    pub summary: String,
    /// Mode this leg travels on
    pub mode: Mode,
    /// Stops passed through, in travel order
    pub stops: Vec<StopPoint>,
}

impl Leg {
    /// Returns true if the leg travels on `mode`.
    pub fn is_mode(&self, mode: &Mode) -> bool {
        self.mode == *mode
    }

    /// Returns true if any stop on the leg has external id `id`.
    pub fn calls_at(&self, id: &str) -> bool {
        self.stops.iter().any(|stop| stop.id == id)
    }
}
