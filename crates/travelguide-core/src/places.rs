//! Domain records produced by a city search.

use serde::{Deserialize, Serialize};

/// One geocoder candidate for a free-text city query.
///
/// Only the first candidate of a response is ever consumed; a missing
/// `place_id` on it ends the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub place_id: Option<String>,
    pub city: Option<String>,
}

/// A tourist attraction returned by the places search.
///
/// Coordinates come from a `[longitude, latitude]` pair. A short pair leaves
/// the missing axis as `None`; such a POI is still listed but cannot be
/// placed on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl PointOfInterest {
    /// Builds a POI from a provider coordinate list ordered `[lon, lat]`.
    #[must_use]
    pub fn from_coordinates(name: Option<String>, coordinates: &[f64]) -> Self {
        Self {
            name,
            longitude: coordinates.first().copied(),
            latitude: coordinates.get(1).copied(),
        }
    }

    /// Returns `(longitude, latitude)` when both axes are known.
    #[must_use]
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        self.longitude.zip(self.latitude)
    }

    /// Name shown to the user; unnamed attractions get a placeholder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown POI")
    }
}

/// Current state of the search workflow.
///
/// `Loaded` holds at most the capped number of POIs; `Failed` carries a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<PointOfInterest>),
    Failed(String),
}

impl SearchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// POIs of a successful search, empty for every other state.
    #[must_use]
    pub fn pois(&self) -> &[PointOfInterest] {
        match self {
            SearchState::Loaded(pois) => pois,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coordinates_orders_lon_then_lat() {
        let poi = PointOfInterest::from_coordinates(Some("Louvre Museum".into()), &[2.3364, 48.8606]);
        assert_eq!(poi.longitude, Some(2.3364));
        assert_eq!(poi.latitude, Some(48.8606));
        assert_eq!(poi.lon_lat(), Some((2.3364, 48.8606)));
    }

    #[test]
    fn short_coordinate_pair_has_no_map_position() {
        let poi = PointOfInterest::from_coordinates(None, &[2.3364]);
        assert_eq!(poi.longitude, Some(2.3364));
        assert!(poi.latitude.is_none());
        assert!(poi.lon_lat().is_none());

        let empty = PointOfInterest::from_coordinates(None, &[]);
        assert!(empty.lon_lat().is_none());
    }

    #[test]
    fn unnamed_poi_uses_placeholder() {
        let poi = PointOfInterest::from_coordinates(None, &[0.0, 0.0]);
        assert_eq!(poi.display_name(), "Unknown POI");
    }

    #[test]
    fn search_state_defaults_to_idle() {
        assert_eq!(SearchState::default(), SearchState::Idle);
        assert!(SearchState::default().pois().is_empty());
        assert!(SearchState::Loading.is_loading());
    }

    #[test]
    fn poi_serializes_with_optional_fields() {
        let poi = PointOfInterest::from_coordinates(Some("Eiffel Tower".into()), &[2.2945, 48.8584]);
        let json = serde_json::to_value(&poi).unwrap();
        assert_eq!(json["name"], "Eiffel Tower");
        assert_eq!(json["longitude"], 2.2945);
        assert_eq!(json["latitude"], 48.8584);
    }
}
