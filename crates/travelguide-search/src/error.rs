use thiserror::Error;

const UNKNOWN_ERROR: &str = "unknown error";

/// Why a search ended in [`travelguide_core::SearchState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The geocoder returned no candidates.
    #[error("City not found")]
    CityNotFound,

    /// The first geocoder candidate carried no place id.
    #[error("No place_id for city")]
    NoPlaceId,

    /// The search future was dropped before it finished.
    #[error("Search cancelled")]
    Cancelled,

    /// Any provider failure, carrying its display text.
    #[error("{0}")]
    Places(String),
}

impl SearchError {
    pub(crate) fn places<E: std::fmt::Display>(err: E) -> Self {
        SearchError::Places(err.to_string())
    }

    /// Message published to the UI; falls back to `"unknown error"` when the
    /// underlying failure had no text.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}
