//! Supported stations.

use std::fmt;

/// A TfL ICS code identifying a station in the catalog.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::{CatalogId, StationCatalog};
///
/// assert!(StationCatalog::contains(CatalogId(1000231)));
/// assert!(!StationCatalog::contains(CatalogId(1000001)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogId(pub u32);

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One candidate from a station name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPointMatch {
    /// External identifier used in journey requests (e.g. `940GZZLUTMP`)
    pub id: String,
    /// Catalog id, when the search result carries one
    pub catalog_id: Option<CatalogId>,
    /// Display name
    pub name: String,
}

impl StopPointMatch {
    /// Returns true if this match is a supported station.
    pub fn is_supported(&self) -> bool {
        self.catalog_id.is_some_and(StationCatalog::contains)
    }
}

/// Central Underground stations this planner accepts as endpoints.
///
/// Sorted by id so lookups can binary search.
static STATIONS: &[(CatalogId, &str)] = &[
    (CatalogId(1000013), "Bank"),
    (CatalogId(1000023), "Blackfriars"),
    (CatalogId(1000040), "Cannon Street"),
    (CatalogId(1000044), "Chancery Lane"),
    (CatalogId(1000045), "Charing Cross"),
    (CatalogId(1000056), "Covent Garden"),
    (CatalogId(1000075), "Embankment"),
    (CatalogId(1000112), "Holborn"),
    (CatalogId(1000135), "Leicester Square"),
    (CatalogId(1000143), "Mansion House"),
    (CatalogId(1000148), "Monument"),
    (CatalogId(1000225), "St. Paul's"),
    (CatalogId(1000231), "Temple"),
    (CatalogId(1000235), "Tottenham Court Road"),
];

/// The compiled-in station allow-list.
#[derive(Debug, Clone, Copy)]
pub struct StationCatalog;

impl StationCatalog {
    /// Returns true if `id` is a supported station.
    pub fn contains(id: CatalogId) -> bool {
        Self::name_of(id).is_some()
    }

    /// Display name for a catalog id.
    pub fn name_of(id: CatalogId) -> Option<&'static str> {
        STATIONS
            .binary_search_by_key(&id, |(station, _)| *station)
            .ok()
            .map(|idx| STATIONS[idx].1)
    }

    /// Catalog id for a display name, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn id_of(name: &str) -> Option<CatalogId> {
        let name = name.trim();
        STATIONS
            .iter()
            .find(|(_, station)| station.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    /// All entries in id order.
    pub fn entries() -> impl Iterator<Item = (CatalogId, &'static str)> {
        STATIONS.iter().copied()
    }

    pub fn len() -> usize {
        STATIONS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(STATIONS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn fourteen_stations() {
        assert_eq!(StationCatalog::len(), 14);
        assert_eq!(StationCatalog::entries().count(), 14);
    }

    #[test]
    fn membership() {
        assert!(StationCatalog::contains(CatalogId(1000013)));
        assert!(StationCatalog::contains(CatalogId(1000235)));
        assert!(!StationCatalog::contains(CatalogId(0)));
        assert!(!StationCatalog::contains(CatalogId(1000129)));
    }

    #[test]
    fn name_lookup() {
        assert_eq!(StationCatalog::name_of(CatalogId(1000075)), Some("Embankment"));
        assert_eq!(StationCatalog::name_of(CatalogId(1000225)), Some("St. Paul's"));
        assert_eq!(StationCatalog::name_of(CatalogId(42)), None);
    }

    #[test]
    fn reverse_lookup_ignores_case_and_padding() {
        assert_eq!(
            StationCatalog::id_of("leicester square"),
            Some(CatalogId(1000135))
        );
        assert_eq!(StationCatalog::id_of("  TEMPLE "), Some(CatalogId(1000231)));
        assert_eq!(StationCatalog::id_of("Oxford Circus"), None);
    }

    #[test]
    fn match_support_requires_catalog_id() {
        let supported = StopPointMatch {
            id: "940GZZLUTMP".into(),
            catalog_id: Some(CatalogId(1000231)),
            name: "Temple Underground Station".into(),
        };
        assert!(supported.is_supported());

        let unknown = StopPointMatch {
            catalog_id: Some(CatalogId(1000173)),
            ..supported.clone()
        };
        assert!(!unknown.is_supported());

        let missing = StopPointMatch {
            catalog_id: None,
            ..supported
        };
        assert!(!missing.is_supported());
    }

    #[test]
    fn display() {
        assert_eq!(CatalogId(1000231).to_string(), "1000231");
    }
}
