pub mod client;
pub mod error;
pub mod static_map;
pub mod types;

pub use client::{place_filter, GeoapifyClient, DEFAULT_CATEGORY, DEFAULT_POI_LIMIT};
pub use error::GeoapifyError;
pub use static_map::StaticMap;
pub use types::{FeatureCollection, GeocodeResponse, PoiFeature};
