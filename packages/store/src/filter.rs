//! Case-insensitive name filter over a local list.

use crate::models::Record;

/// Records whose display name contains `term`, ignoring case.
///
/// An empty term keeps every record. Whitespace is matched literally; callers
/// that want it ignored trim first. The source slice is never modified and
/// order is preserved.
pub fn filter_by_name<R: Record>(records: &[R], term: &str) -> Vec<R> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.display_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
