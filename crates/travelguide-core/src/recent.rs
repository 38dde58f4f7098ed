use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously searched city term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchEntry {
    pub id: i64,
    pub search_term: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl RecentSearchEntry {
    #[must_use]
    pub fn searched_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Whether a search for `term` should be added to the recent list.
///
/// Blank terms are never recorded. Duplicates are detected by exact,
/// case-sensitive comparison against the caller's current list.
#[must_use]
pub fn should_record<S: AsRef<str>>(term: &str, recent_terms: &[S]) -> bool {
    !term.trim().is_empty() && !recent_terms.iter().any(|t| t.as_ref() == term)
}
