//! TfL API response DTOs.
//!
//! `Option` and `#[serde(default)]` are used wherever TfL is known to omit
//! fields (walking legs have no path, some points have no NaPTAN id).

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::domain::CatalogId;

/// Response from `StopPoint/Search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointSearchResponse {
    /// Search candidates, best first.
    #[serde(default)]
    pub matches: Vec<StopPointMatchDto>,
}

/// A single search candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointMatchDto {
    /// NaPTAN id, e.g. "940GZZLUTMP".
    pub id: String,

    /// ICS code. TfL sends this as a string; numbers are accepted too.
    #[serde(default, deserialize_with = "ics_id")]
    pub ics_id: Option<CatalogId>,

    /// Display name, e.g. "Temple Underground Station".
    pub name: String,
}

/// Response from `Journey/JourneyResults`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResultsResponse {
    #[serde(default)]
    pub journeys: Vec<JourneyDto>,
}

/// One journey option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    pub start_date_time: NaiveDateTime,
    pub arrival_date_time: NaiveDateTime,
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub instruction: InstructionDto,
    pub departure_point: PointDto,
    pub arrival_point: PointDto,
    /// Missing for some walking legs.
    pub path: Option<PathDto>,
    pub mode: ModeDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionDto {
    #[serde(default)]
    pub summary: String,
}

/// Departure or arrival point of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDto {
    #[serde(default)]
    pub common_name: String,
    pub naptan_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDto {
    #[serde(default)]
    pub stop_points: Vec<StopPointDto>,
}

/// A stop the leg passes through.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDto {
    /// Mode id, e.g. "tube" or "walking".
    pub id: String,
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIcsId {
    Number(u32),
    Text(String),
}

fn ics_id<'de, D>(deserializer: D) -> Result<Option<CatalogId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawIcsId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawIcsId::Number(n)) => Ok(Some(CatalogId(n))),
        Some(RawIcsId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawIcsId::Text(s)) => s
            .trim()
            .parse()
            .map(|n| Some(CatalogId(n)))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ics_id_as_string_or_number() {
        let json = r#"{"matches":[
            {"id":"940GZZLUTMP","icsId":"1000231","name":"Temple Underground Station"},
            {"id":"940GZZLUBNK","icsId":1000013,"name":"Bank Underground Station"},
            {"id":"HUBZZZ","name":"Somewhere"}
        ]}"#;
        let response: StopPointSearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.matches[0].ics_id, Some(CatalogId(1000231)));
        assert_eq!(response.matches[1].ics_id, Some(CatalogId(1000013)));
        assert_eq!(response.matches[2].ics_id, None);
    }

    #[test]
    fn malformed_ics_id_rejected() {
        let json = r#"{"matches":[{"id":"X","icsId":"abc","name":"X"}]}"#;
        assert!(serde_json::from_str::<StopPointSearchResponse>(json).is_err());
    }

    #[test]
    fn missing_matches_is_empty() {
        let response: StopPointSearchResponse =
            serde_json::from_str(r#"{"query":"Nowhere","total":0}"#).unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn walking_leg_without_path() {
        let json = r#"{
            "startDateTime": "2024-03-15T09:05:00",
            "arrivalDateTime": "2024-03-15T09:15:00",
            "legs": [{
                "instruction": {"summary": "Walk to Leicester Square"},
                "departurePoint": {"commonName": "Embankment"},
                "arrivalPoint": {"commonName": "Leicester Square"},
                "mode": {"id": "walking"}
            }]
        }"#;
        let journey: JourneyDto = serde_json::from_str(json).unwrap();

        assert_eq!(journey.legs.len(), 1);
        assert!(journey.legs[0].path.is_none());
        assert!(journey.legs[0].departure_point.naptan_id.is_none());
        assert_eq!(journey.legs[0].mode.id, "walking");
    }
}
