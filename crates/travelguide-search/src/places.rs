use std::fmt::Display;
use std::future::Future;

use travelguide_core::{GeocodeResult, PointOfInterest};
use travelguide_geoapify::{GeoapifyClient, GeoapifyError};

/// The two provider calls a city search needs.
///
/// Errors only have to be displayable: the workflow does not distinguish
/// failure kinds coming from the provider.
pub trait PlacesApi {
    type Error: Display;

    /// Geocode candidates for `text`, in provider order.
    fn geocode(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>, Self::Error>> + Send;

    /// Places of `category` inside the area described by `filter`.
    fn pois_by_place(
        &self,
        filter: &str,
        category: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<PointOfInterest>, Self::Error>> + Send;
}

impl PlacesApi for GeoapifyClient {
    type Error = GeoapifyError;

    fn geocode(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>, Self::Error>> + Send {
        GeoapifyClient::geocode(self, text)
    }

    fn pois_by_place(
        &self,
        filter: &str,
        category: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<PointOfInterest>, Self::Error>> + Send {
        GeoapifyClient::pois_by_place(self, filter, category, limit)
    }
}
