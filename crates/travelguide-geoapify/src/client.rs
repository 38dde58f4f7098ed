//! HTTP client for the Geoapify geocoding and places APIs.
//!
//! Wraps `reqwest` with Geoapify API key handling and typed response
//! deserialization. Every failure (transport, HTTP status, payload shape)
//! surfaces as a [`GeoapifyError`].

use std::time::Duration;

use reqwest::{Client, Url};
use travelguide_core::{GeocodeResult, PointOfInterest};

use crate::error::GeoapifyError;
use crate::types::{FeatureCollection, GeocodeResponse, PoiFeature};

const DEFAULT_BASE_URL: &str = "https://api.geoapify.com/";

/// Places category searched for a city.
pub const DEFAULT_CATEGORY: &str = "tourism.attraction";

/// Maximum number of POIs requested and kept per search.
pub const DEFAULT_POI_LIMIT: usize = 20;

/// Builds the places `filter` value scoping a search to a geocoded place.
#[must_use]
pub fn place_filter(place_id: &str) -> String {
    format!("place:{place_id}")
}

/// Client for the Geoapify REST API.
///
/// Use [`GeoapifyClient::new`] for production or
/// [`GeoapifyClient::with_base_url`] to point at a mock server in tests.
pub struct GeoapifyClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GeoapifyClient {
    /// Creates a new client pointed at the production Geoapify API.
    ///
    /// # Errors
    ///
    /// Returns [`GeoapifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeoapifyError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoapifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeoapifyError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeoapifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("travelguide/0.1")
            .build()?;

        // Normalise: exactly one trailing slash so relative endpoint paths
        // are joined under the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| GeoapifyError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Geocodes free text and returns every candidate in provider order.
    ///
    /// Calls `v1/geocode/search` with `format=json`. `text` is sent verbatim;
    /// trimming is the caller's job.
    ///
    /// # Errors
    ///
    /// - [`GeoapifyError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoapifyError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, text: &str) -> Result<Vec<GeocodeResult>, GeoapifyError> {
        let url = self.build_url(
            "v1/geocode/search",
            &[("text", text), ("format", "json")],
        )?;
        let body = self.request_json(&url).await?;

        let response: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| GeoapifyError::Deserialize {
                context: format!("geocode(text={text})"),
                source: e,
            })?;

        let results = response.into_results();
        tracing::debug!(text, candidates = results.len(), "geocode completed");
        Ok(results)
    }

    /// Searches places of `category` inside the area named by `filter`.
    ///
    /// `filter` is usually built with [`place_filter`]. Returns at most what
    /// the provider sends back for `limit`; no further truncation happens
    /// here.
    ///
    /// # Errors
    ///
    /// - [`GeoapifyError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoapifyError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn pois_by_place(
        &self,
        filter: &str,
        category: &str,
        limit: usize,
    ) -> Result<Vec<PointOfInterest>, GeoapifyError> {
        let limit_param = limit.to_string();
        let url = self.build_url(
            "v2/places",
            &[
                ("categories", category),
                ("filter", filter),
                ("limit", &limit_param),
            ],
        )?;
        let body = self.request_json(&url).await?;

        let collection: FeatureCollection<PoiFeature> =
            serde_json::from_value(body).map_err(|e| GeoapifyError::Deserialize {
                context: format!("places(filter={filter})"),
                source: e,
            })?;

        let pois: Vec<PointOfInterest> = collection
            .features
            .into_iter()
            .map(PointOfInterest::from)
            .collect();
        tracing::debug!(filter, category, count = pois.len(), "places search completed");
        Ok(pois)
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    ///
    /// Joins `path` onto the base URL, then appends the caller's parameters
    /// followed by `apiKey`.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GeoapifyError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| GeoapifyError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("apiKey", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GeoapifyError::Http`] on network failure or a non-2xx status.
    /// Returns [`GeoapifyError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GeoapifyError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeoapifyError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
