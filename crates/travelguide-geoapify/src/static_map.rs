//! Static map image URLs for POIs and favorites.
//!
//! The URL is only rendered for display; nothing here fetches it. It embeds
//! the API key in cleartext, as the Geoapify static map endpoint requires.

use reqwest::Url;
use travelguide_core::{FavoriteEntry, PointOfInterest};

use crate::error::GeoapifyError;

const DEFAULT_MAPS_BASE_URL: &str = "https://maps.geoapify.com/";
const DEFAULT_STYLE: &str = "osm-carto";
const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 200;
const DEFAULT_ZOOM: u8 = 15;
const DEFAULT_MARKER: &str = "color:#ff0000;size:large";

/// Builder for `v1/staticmap` URLs centred on a single marker.
#[derive(Debug, Clone)]
pub struct StaticMap {
    base_url: Url,
    api_key: String,
    width: u32,
    height: u32,
    zoom: u8,
}

impl StaticMap {
    /// Static maps against the production Geoapify maps host.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in host; the `Result` mirrors
    /// [`StaticMap::with_base_url`].
    pub fn new(api_key: &str) -> Result<Self, GeoapifyError> {
        Self::with_base_url(api_key, DEFAULT_MAPS_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`GeoapifyError::InvalidBaseUrl`] if `base_url` does not parse
    /// or cannot be joined with the static map path.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, GeoapifyError> {
        let invalid = |reason: String| GeoapifyError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let base_url = base
            .join("v1/staticmap")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            base_url,
            api_key: api_key.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: DEFAULT_ZOOM,
        })
    }

    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Map URL centred on `(lon, lat)` with a single red marker.
    #[must_use]
    pub fn url(&self, lon: f64, lat: f64) -> Url {
        let lonlat = format!("lonlat:{lon},{lat}");
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("style", DEFAULT_STYLE)
            .append_pair("width", &self.width.to_string())
            .append_pair("height", &self.height.to_string())
            .append_pair("center", &lonlat)
            .append_pair("zoom", &self.zoom.to_string())
            .append_pair("marker", &format!("{lonlat};{DEFAULT_MARKER}"))
            .append_pair("apiKey", &self.api_key);
        url
    }

    /// Map URL for a POI, or `None` when it lacks either coordinate.
    #[must_use]
    pub fn for_poi(&self, poi: &PointOfInterest) -> Option<Url> {
        poi.lon_lat().map(|(lon, lat)| self.url(lon, lat))
    }

    /// Map URL for a stored favorite, or `None` when it lacks either coordinate.
    #[must_use]
    pub fn for_favorite(&self, favorite: &FavoriteEntry) -> Option<Url> {
        favorite.lon_lat().map(|(lon, lat)| self.url(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn default_url_matches_app_layout() {
        let maps = StaticMap::new("k3y").unwrap();
        let url = maps.url(2.3364, 48.8606);

        assert_eq!(url.host_str(), Some("maps.geoapify.com"));
        assert_eq!(url.path(), "/v1/staticmap");
        assert_eq!(
            query(&url),
            vec![
                ("style".to_string(), "osm-carto".to_string()),
                ("width".to_string(), "400".to_string()),
                ("height".to_string(), "200".to_string()),
                ("center".to_string(), "lonlat:2.3364,48.8606".to_string()),
                ("zoom".to_string(), "15".to_string()),
                (
                    "marker".to_string(),
                    "lonlat:2.3364,48.8606;color:#ff0000;size:large".to_string()
                ),
                ("apiKey".to_string(), "k3y".to_string()),
            ]
        );
    }

    #[test]
    fn size_and_zoom_are_overridable() {
        let maps = StaticMap::new("k").unwrap().size(800, 600).zoom(12);
        let pairs = query(&maps.url(0.0, 0.0));
        assert!(pairs.contains(&("width".to_string(), "800".to_string())));
        assert!(pairs.contains(&("height".to_string(), "600".to_string())));
        assert!(pairs.contains(&("zoom".to_string(), "12".to_string())));
    }

    #[test]
    fn poi_without_latitude_has_no_map() {
        let maps = StaticMap::new("k").unwrap();
        let poi = PointOfInterest::from_coordinates(Some("Half".to_string()), &[2.0]);
        assert!(maps.for_poi(&poi).is_none());
    }

    #[test]
    fn favorite_map_uses_stored_coordinates() {
        let maps = StaticMap::with_base_url("k", "http://localhost:9000").unwrap();
        let favorite = FavoriteEntry {
            id: 1,
            name: Some("Louvre Museum".to_string()),
            lat: Some(48.8606),
            lon: Some(2.3364),
            city: Some("Paris".to_string()),
        };
        let url = maps.for_favorite(&favorite).unwrap();
        assert!(url.as_str().starts_with("http://localhost:9000/v1/staticmap?"));
        assert!(query(&url).contains(&("center".to_string(), "lonlat:2.3364,48.8606".to_string())));
    }
}
