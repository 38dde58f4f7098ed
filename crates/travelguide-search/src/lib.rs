//! City search: geocode a city, then list its tourist attractions.
//!
//! [`SearchWorkflow`] owns the single authoritative [`SearchState`] and
//! publishes every transition on a `tokio::sync::watch` channel. The places
//! provider is reached through the [`PlacesApi`] trait so tests can swap in
//! fakes.

pub mod error;
pub mod places;
pub mod workflow;

pub use error::SearchError;
pub use places::PlacesApi;
pub use workflow::SearchWorkflow;
