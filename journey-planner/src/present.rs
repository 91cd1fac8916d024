//! Console rendering of journey results.

use std::fmt;

use crate::domain::{Journey, StationCatalog};

const SEPARATOR: &str = "--------------------------";

/// The stations a query was made for, as the user named them.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub via: Option<&'a str>,
    pub excluding: Option<&'a str>,
}

/// Journeys plus the request they answer, ready to print.
///
/// Journeys and legs are rendered in the order given.
#[derive(Debug, Clone, Copy)]
pub struct Itinerary<'a> {
    pub journeys: &'a [Journey],
    pub request: ItineraryRequest<'a>,
}

impl Itinerary<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = &self.request;
        writeln!(f, "Your journey from {} to {}", request.from, request.to)?;
        if let Some(via) = request.via {
            writeln!(f, "via {via}")?;
        }
        if let Some(excluding) = request.excluding {
            writeln!(f, "excluding {excluding}")?;
        }
        Ok(())
    }

    fn write_journey(&self, f: &mut fmt::Formatter<'_>, journey: &Journey) -> fmt::Result {
        writeln!(
            f,
            "Departing {} at {}",
            self.request.from,
            journey.start.format("%H:%M:%S")
        )?;

        for leg in &journey.legs {
            writeln!(f)?;
            writeln!(f, "From {}, take the {}", leg.departure.name, leg.summary)?;
            writeln!(f)?;
            writeln!(f, "Calling at:")?;
            for stop in &leg.stops {
                writeln!(f, "-{}", stop.name)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Arriving at {} at {}",
            self.request.to,
            journey.arrival.format("%H:%M:%S")
        )?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f)
    }
}

impl fmt::Display for Itinerary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;

        if self.journeys.is_empty() {
            return writeln!(
                f,
                "returned 0 results. Please try again with a different set of stations"
            );
        }

        writeln!(f)?;
        for journey in self.journeys {
            self.write_journey(f, journey)?;
        }
        Ok(())
    }
}

/// Render `journeys` for `request`.
pub fn present(journeys: &[Journey], request: ItineraryRequest<'_>) -> String {
    Itinerary { journeys, request }.to_string()
}

/// The supported stations, one per line, in catalog order.
pub fn station_list() -> String {
    let mut text = String::from("Supported stations:\n");
    for (id, name) in StationCatalog::entries() {
        text.push_str(&format!("  {name} ({id})\n"));
    }
    text
}
