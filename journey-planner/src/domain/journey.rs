//! Journey types.
//!
//! A `Journey` is one candidate route returned by the planner API: a start
//! and arrival time and the legs in between. It is built from a single
//! response and never mutated afterwards.

use chrono::NaiveDateTime;

use super::{Leg, Mode};

/// A candidate route from origin to destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Departure from the origin (London local time)
    pub start: NaiveDateTime,
    /// Arrival at the destination (London local time)
    pub arrival: NaiveDateTime,
    /// Legs in travel order
    pub legs: Vec<Leg>,
}

impl Journey {
    pub fn new(start: NaiveDateTime, arrival: NaiveDateTime, legs: Vec<Leg>) -> Self {
        Self {
            start,
            arrival,
            legs,
        }
    }

    /// Returns true if at least one leg travels on `mode`.
    pub fn uses_mode(&self, mode: &Mode) -> bool {
        self.legs.iter().any(|leg| leg.is_mode(mode))
    }

    /// Returns true if any leg passes through the stop with id `id`.
    pub fn calls_at(&self, id: &str) -> bool {
        self.legs.iter().any(|leg| leg.calls_at(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopPoint;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn leg(mode: &str, stops: &[&str]) -> Leg {
        Leg {
            departure: StopPoint::new("", "Start"),
            arrival: StopPoint::new("", "End"),
            summary: String::new(),
            mode: Mode::from(mode),
            stops: stops.iter().map(|id| StopPoint::new(*id, *id)).collect(),
        }
    }

    #[test]
    fn mixed_journey_uses_tube() {
        let journey = Journey::new(
            at(9, 0),
            at(9, 20),
            vec![leg("walking", &[]), leg("tube", &["X"])],
        );
        assert!(journey.uses_mode(&Mode::tube()));
        assert!(!journey.uses_mode(&Mode::from("bus")));
    }

    #[test]
    fn walking_only_journey_does_not_use_tube() {
        let journey = Journey::new(at(9, 0), at(9, 20), vec![leg("walking", &[])]);
        assert!(!journey.uses_mode(&Mode::tube()));
    }

    #[test]
    fn empty_journey_uses_nothing() {
        let journey = Journey::new(at(9, 0), at(9, 0), Vec::new());
        assert!(!journey.uses_mode(&Mode::tube()));
        assert!(!journey.calls_at("X"));
    }

    #[test]
    fn calls_at_any_leg() {
        let journey = Journey::new(
            at(9, 0),
            at(9, 20),
            vec![leg("tube", &["A", "B"]), leg("tube", &["C"])],
        );
        assert!(journey.calls_at("C"));
        assert!(!journey.calls_at("D"));
    }
}
