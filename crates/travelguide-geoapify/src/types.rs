//! Geoapify API response types.
//!
//! The geocoder is called with `format=json`, which returns a flat
//! `{"results": [...]}` list. The places endpoint returns a GeoJSON feature
//! collection whose coordinates are ordered `[longitude, latitude]`.

use serde::Deserialize;
use travelguide_core::{GeocodeResult, PointOfInterest};

// ---------------------------------------------------------------------------
// v1/geocode/search
// ---------------------------------------------------------------------------

/// Body of a `v1/geocode/search?format=json` response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Absent or `null` when nothing matched.
    #[serde(default)]
    pub results: Option<Vec<GeocodeCandidate>>,
}

/// One geocoder match. Geoapify returns many more fields; only the ones the
/// search needs are kept.
#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl From<GeocodeCandidate> for GeocodeResult {
    fn from(candidate: GeocodeCandidate) -> Self {
        Self {
            place_id: candidate.place_id,
            city: candidate.city,
        }
    }
}

impl GeocodeResponse {
    #[must_use]
    pub fn into_results(self) -> Vec<GeocodeResult> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodeResult::from)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// v2/places
// ---------------------------------------------------------------------------

/// A GeoJSON feature collection.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection<T> {
    #[serde(default = "Vec::new")]
    pub features: Vec<T>,
}

/// A single place feature.
#[derive(Debug, Deserialize)]
pub struct PoiFeature {
    #[serde(default)]
    pub properties: PoiProperties,
    #[serde(default)]
    pub geometry: Geometry,
}

#[derive(Debug, Default, Deserialize)]
pub struct PoiProperties {
    #[serde(default)]
    pub name: Option<String>,
}

/// Point geometry; `coordinates` is `[longitude, latitude]`.
#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl From<PoiFeature> for PointOfInterest {
    fn from(feature: PoiFeature) -> Self {
        PointOfInterest::from_coordinates(feature.properties.name, &feature.geometry.coordinates)
    }
}
