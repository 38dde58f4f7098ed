use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;
use travelguide_core::{PointOfInterest, SearchState};
use travelguide_geoapify::{place_filter, DEFAULT_CATEGORY, DEFAULT_POI_LIMIT};

use crate::error::SearchError;
use crate::places::PlacesApi;

/// City-to-attractions search state machine.
///
/// States move `Idle -> Loading -> Loaded | Failed`, and back to `Loading`
/// on the next trigger. A trigger that arrives while a search is `Loading`
/// is ignored, so two overlapping searches never race to publish. Dropping a
/// `trigger` future before it finishes publishes `Failed("Search cancelled")`,
/// so the workflow never stays `Loading` without a search behind it.
pub struct SearchWorkflow<P> {
    places: P,
    state: watch::Sender<SearchState>,
    last_query: Mutex<Option<String>>,
}

impl<P: PlacesApi> SearchWorkflow<P> {
    #[must_use]
    pub fn new(places: P) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            places,
            state,
            last_query: Mutex::new(None),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// The city text of the most recent accepted trigger.
    #[must_use]
    pub fn last_query(&self) -> Option<String> {
        self.last_query
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs one search for `city_text` and returns the state it ended in.
    ///
    /// Returns `None` without touching the state when another search is
    /// still `Loading`.
    pub async fn trigger(&self, city_text: &str) -> Option<SearchState> {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = SearchState::Loading;
            true
        });
        if !started {
            tracing::debug!(city = city_text, "search already in flight; trigger ignored");
            return None;
        }

        let in_flight = InFlight {
            state: &self.state,
            finished: false,
        };

        *self
            .last_query
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(city_text.to_string());

        let next = match self.resolve(city_text).await {
            Ok(pois) => {
                tracing::info!(city = city_text, count = pois.len(), "search loaded");
                SearchState::Loaded(pois)
            }
            Err(err) => {
                tracing::warn!(city = city_text, error = %err, "search failed");
                SearchState::Failed(err.user_message())
            }
        };

        in_flight.finish(next.clone());
        Some(next)
    }

    /// Re-issues the last accepted search.
    ///
    /// Returns `None` when nothing has been searched yet or a search is in
    /// flight.
    pub async fn retry(&self) -> Option<SearchState> {
        let city = self.last_query()?;
        self.trigger(&city).await
    }

    async fn resolve(&self, city_text: &str) -> Result<Vec<PointOfInterest>, SearchError> {
        let city = city_text.trim();

        let candidates = self
            .places
            .geocode(city)
            .await
            .map_err(SearchError::places)?;
        let first = candidates
            .into_iter()
            .next()
            .ok_or(SearchError::CityNotFound)?;
        let place_id = first.place_id.ok_or(SearchError::NoPlaceId)?;

        let filter = place_filter(&place_id);
        let mut pois = self
            .places
            .pois_by_place(&filter, DEFAULT_CATEGORY, DEFAULT_POI_LIMIT)
            .await
            .map_err(SearchError::places)?;

        // Upstream may ignore `limit`.
        pois.truncate(DEFAULT_POI_LIMIT);
        Ok(pois)
    }
}

/// Holds the `Loading` state for one accepted trigger.
///
/// Publishes the final state on [`InFlight::finish`]; if dropped first, the
/// search was cancelled and `Failed` is published instead.
struct InFlight<'a> {
    state: &'a watch::Sender<SearchState>,
    finished: bool,
}

impl InFlight<'_> {
    fn finish(mut self, next: SearchState) {
        self.finished = true;
        self.state.send_replace(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("search dropped before completion");
            self.state
                .send_replace(SearchState::Failed(SearchError::Cancelled.user_message()));
        }
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
