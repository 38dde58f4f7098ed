//! Favorite places and the toggle decision.
//!
//! A favorite is identified by `(name, lat, lon)` rather than its stored id,
//! because POIs carry no stable remote identifier. Coordinates are compared
//! by exact value; both sides come from the same upstream payload.

use serde::{Deserialize, Serialize};

use crate::places::PointOfInterest;

/// A persisted favorite row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

/// A favorite that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFavorite {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

impl NewFavorite {
    /// Candidate favorite for `poi`, tagged with the city it was found in.
    #[must_use]
    pub fn from_poi(poi: &PointOfInterest, current_city: &str) -> Self {
        Self {
            name: poi.name.clone(),
            lat: poi.latitude,
            lon: poi.longitude,
            city: Some(current_city.to_string()),
        }
    }
}

impl FavoriteEntry {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown POI")
    }

    #[must_use]
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        self.lon.zip(self.lat)
    }
}

/// The single store mutation a toggle resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteAction {
    Insert(NewFavorite),
    Delete(FavoriteEntry),
}

fn same_place(
    name: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
    entry: &FavoriteEntry,
) -> bool {
    entry.name.as_deref() == name && entry.lat == lat && entry.lon == lon
}

fn matches_poi(poi: &PointOfInterest, entry: &FavoriteEntry) -> bool {
    same_place(poi.name.as_deref(), poi.latitude, poi.longitude, entry)
}

/// Whether `poi` is already among `favorites`.
#[must_use]
pub fn is_favorite(poi: &PointOfInterest, favorites: &[FavoriteEntry]) -> bool {
    favorites.iter().any(|entry| matches_poi(poi, entry))
}

/// Decide how toggling `poi` changes the favorites table.
///
/// Deletes the first matching entry when one exists, otherwise inserts a
/// new favorite tagged with `current_city`. Callers re-read the table after
/// applying the action.
#[must_use]
pub fn plan_toggle(
    poi: &PointOfInterest,
    current_city: &str,
    favorites: &[FavoriteEntry],
) -> FavoriteAction {
    match favorites.iter().find(|entry| matches_poi(poi, entry)) {
        Some(existing) => FavoriteAction::Delete(existing.clone()),
        None => FavoriteAction::Insert(NewFavorite::from_poi(poi, current_city)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn louvre() -> PointOfInterest {
        PointOfInterest::from_coordinates(Some("Louvre Museum".to_string()), &[2.3364, 48.8606])
    }

    fn stored(id: i64, candidate: NewFavorite) -> FavoriteEntry {
        FavoriteEntry {
            id,
            name: candidate.name,
            lat: candidate.lat,
            lon: candidate.lon,
            city: candidate.city,
        }
    }

    /// Applies an action to an in-memory table the way the store would.
    fn apply(favorites: &mut Vec<FavoriteEntry>, action: FavoriteAction) {
        match action {
            FavoriteAction::Insert(candidate) => {
                let id = favorites.iter().map(|f| f.id).max().unwrap_or(0) + 1;
                favorites.push(stored(id, candidate));
            }
            FavoriteAction::Delete(entry) => {
                let found = favorites
                    .iter()
                    .position(|f| same_place(entry.name.as_deref(), entry.lat, entry.lon, f));
                if let Some(pos) = found {
                    favorites.remove(pos);
                }
            }
        }
    }

    #[test]
    fn toggle_on_empty_table_inserts_candidate() {
        let action = plan_toggle(&louvre(), "Paris", &[]);
        assert_eq!(
            action,
            FavoriteAction::Insert(NewFavorite {
                name: Some("Louvre Museum".to_string()),
                lat: Some(48.8606),
                lon: Some(2.3364),
                city: Some("Paris".to_string()),
            })
        );
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let poi = louvre();
        let mut favorites: Vec<FavoriteEntry> = Vec::new();

        let action = plan_toggle(&poi, "Paris", &favorites);
        apply(&mut favorites, action);
        assert!(is_favorite(&poi, &favorites));
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].city.as_deref(), Some("Paris"));

        let action = plan_toggle(&poi, "Paris", &favorites);
        apply(&mut favorites, action);
        assert!(!is_favorite(&poi, &favorites));
        assert!(favorites.is_empty());
    }

    #[test]
    fn membership_ignores_id_and_city() {
        let poi = louvre();
        let favorites = vec![FavoriteEntry {
            id: 99,
            name: Some("Louvre Museum".to_string()),
            lat: Some(48.8606),
            lon: Some(2.3364),
            city: Some("Somewhere else".to_string()),
        }];
        assert!(is_favorite(&poi, &favorites));
        assert_eq!(
            plan_toggle(&poi, "Paris", &favorites),
            FavoriteAction::Delete(favorites[0].clone())
        );
    }

    #[test]
    fn membership_uses_exact_coordinates() {
        let poi = louvre();
        let favorites = vec![FavoriteEntry {
            id: 1,
            name: Some("Louvre Museum".to_string()),
            lat: Some(48.860_600_1),
            lon: Some(2.3364),
            city: None,
        }];
        assert!(!is_favorite(&poi, &favorites));
    }

    #[test]
    fn unnamed_pois_match_on_coordinates() {
        let poi = PointOfInterest::from_coordinates(None, &[1.0, 2.0]);
        let favorites = vec![stored(1, NewFavorite::from_poi(&poi, "Nowhere"))];
        assert!(is_favorite(&poi, &favorites));

        let named = PointOfInterest::from_coordinates(Some("Named".to_string()), &[1.0, 2.0]);
        assert!(!is_favorite(&named, &favorites));
    }

    #[test]
    fn stored_candidate_is_recognised_as_favorite() {
        let poi = louvre();
        let entry = stored(7, NewFavorite::from_poi(&poi, "Paris"));
        assert!(is_favorite(&poi, std::slice::from_ref(&entry)));
        assert_eq!(entry.lon_lat(), Some((2.3364, 48.8606)));
    }
}
