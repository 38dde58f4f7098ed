//! Database operations for the `recent_search` table.

use sqlx::SqlitePool;
use travelguide_core::RecentSearchEntry;

use crate::DbError;

/// A row from the `recent_search` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecentSearchRow {
    pub id: i64,
    pub search_term: String,
    pub timestamp: i64,
}

impl From<RecentSearchRow> for RecentSearchEntry {
    fn from(row: RecentSearchRow) -> Self {
        Self {
            id: row.id,
            search_term: row.search_term,
            timestamp: row.timestamp,
        }
    }
}

/// Appends a search term with its epoch-millisecond timestamp.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_recent_search(
    pool: &SqlitePool,
    search_term: &str,
    timestamp_ms: i64,
) -> Result<RecentSearchEntry, DbError> {
    let row = sqlx::query_as::<_, RecentSearchRow>(
        "INSERT INTO recent_search (search_term, timestamp) \
         VALUES (?1, ?2) \
         RETURNING id, search_term, timestamp",
    )
    .bind(search_term)
    .bind(timestamp_ms)
    .fetch_one(pool)
    .await?;

    tracing::debug!(id = row.id, search_term, "recent search recorded");
    Ok(row.into())
}

/// Returns every recent search, newest first.
///
/// Entries sharing a timestamp fall back to insertion order, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent_searches(pool: &SqlitePool) -> Result<Vec<RecentSearchEntry>, DbError> {
    let rows = sqlx::query_as::<_, RecentSearchRow>(
        "SELECT id, search_term, timestamp FROM recent_search \
         ORDER BY timestamp DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(RecentSearchEntry::from).collect())
}

/// Deletes every recent search and returns how many were removed.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn clear_recent_searches(pool: &SqlitePool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM recent_search")
        .execute(pool)
        .await?;
    let removed = result.rows_affected();
    tracing::info!(removed, "recent searches cleared");
    Ok(removed)
}
