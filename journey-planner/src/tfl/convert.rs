//! Conversion from TfL DTOs to domain types.

use crate::domain::{Journey, Leg, Mode, StopPoint, StopPointMatch};

use super::types::{JourneyDto, LegDto, PointDto, StopPointDto, StopPointMatchDto};

impl From<StopPointMatchDto> for StopPointMatch {
    fn from(dto: StopPointMatchDto) -> Self {
        StopPointMatch {
            id: dto.id,
            catalog_id: dto.ics_id,
            name: dto.name,
        }
    }
}

impl From<JourneyDto> for Journey {
    fn from(dto: JourneyDto) -> Self {
        Journey::new(
            dto.start_date_time,
            dto.arrival_date_time,
            dto.legs.into_iter().map(Leg::from).collect(),
        )
    }
}

impl From<LegDto> for Leg {
    fn from(dto: LegDto) -> Self {
        Leg {
            departure: dto.departure_point.into(),
            arrival: dto.arrival_point.into(),
            summary: dto.instruction.summary,
            mode: Mode::new(dto.mode.id),
            stops: dto
                .path
                .map(|path| path.stop_points.into_iter().map(StopPoint::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<PointDto> for StopPoint {
    fn from(dto: PointDto) -> Self {
        StopPoint::new(dto.naptan_id.unwrap_or_default(), dto.common_name)
    }
}

impl From<StopPointDto> for StopPoint {
    fn from(dto: StopPointDto) -> Self {
        StopPoint::new(dto.id, dto.name)
    }
}
