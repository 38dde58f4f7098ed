//! Database operations for the `favorite_poi` table.

use sqlx::SqlitePool;
use travelguide_core::{FavoriteAction, FavoriteEntry, NewFavorite};

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `favorite_poi` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

impl From<FavoriteRow> for FavoriteEntry {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            lat: row.lat,
            lon: row.lon,
            city: row.city,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns every favorite, ordered by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_favorites(pool: &SqlitePool) -> Result<Vec<FavoriteEntry>, DbError> {
    let rows = sqlx::query_as::<_, FavoriteRow>(
        "SELECT id, name, lat, lon, city FROM favorite_poi ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(FavoriteEntry::from).collect())
}

/// Inserts a favorite and returns it with its assigned id.
///
/// No uniqueness is enforced here; duplicate avoidance belongs to the
/// toggle decision.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_favorite(
    pool: &SqlitePool,
    favorite: &NewFavorite,
) -> Result<FavoriteEntry, DbError> {
    let row = sqlx::query_as::<_, FavoriteRow>(
        "INSERT INTO favorite_poi (name, lat, lon, city) \
         VALUES (?1, ?2, ?3, ?4) \
         RETURNING id, name, lat, lon, city",
    )
    .bind(favorite.name.as_deref())
    .bind(favorite.lat)
    .bind(favorite.lon)
    .bind(favorite.city.as_deref())
    .fetch_one(pool)
    .await?;

    tracing::info!(id = row.id, name = ?row.name, "favorite added");
    Ok(row.into())
}

/// Deletes the favorite equal to `entry` by `(name, lat, lon)`.
///
/// When duplicates exist only the lowest-id match is removed, so one call
/// undoes exactly one insert. `NULL` columns compare equal to `None`.
/// Returns the number of rows removed (0 or 1).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn delete_favorite(pool: &SqlitePool, entry: &FavoriteEntry) -> Result<u64, DbError> {
    let result = sqlx::query(
        "DELETE FROM favorite_poi \
         WHERE id = ( \
             SELECT id FROM favorite_poi \
             WHERE name IS ?1 AND lat IS ?2 AND lon IS ?3 \
             ORDER BY id \
             LIMIT 1 \
         )",
    )
    .bind(entry.name.as_deref())
    .bind(entry.lat)
    .bind(entry.lon)
    .execute(pool)
    .await?;

    let removed = result.rows_affected();
    tracing::info!(name = ?entry.name, removed, "favorite deleted");
    Ok(removed)
}

/// Removes a favorite by id.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no favorite has that id, or
/// [`DbError::Sqlx`] if the delete fails.
pub async fn remove_favorite(pool: &SqlitePool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM favorite_poi WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    tracing::info!(id, "favorite removed");
    Ok(())
}

/// Performs the single mutation a toggle resolved to.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the underlying insert or delete fails.
pub async fn apply_favorite_action(
    pool: &SqlitePool,
    action: &FavoriteAction,
) -> Result<(), DbError> {
    match action {
        FavoriteAction::Insert(favorite) => {
            insert_favorite(pool, favorite).await?;
        }
        FavoriteAction::Delete(entry) => {
            delete_favorite(pool, entry).await?;
        }
    }
    Ok(())
}
