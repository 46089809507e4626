//! # Local list: a screen's in-memory copy of the collection
//!
//! Every screen owns one [`LocalList`]. It starts empty, is filled once by
//! [`LocalList::from_fetch`] when the screen activates, and afterwards changes
//! only through the three reducers that mirror a successful remote mutation:
//!
//! | Reducer | After |
//! |---------|-------|
//! | [`append_created`](LocalList::append_created) | create |
//! | [`replace_updated`](LocalList::replace_updated) | update |
//! | [`remove_by_id`](LocalList::remove_by_id) | delete |
//!
//! Nothing here is persisted: the list is rebuilt from the remote collection
//! every time a screen mounts.
//!
//! ## Provisional identifiers
//!
//! A create response is not guaranteed to carry an identifier that is usable
//! in the list (mock backends echo the same id for every create). When the
//! response id is missing or already present, [`append_created`](LocalList::append_created)
//! synthesizes one from the current time in milliseconds and marks the record
//! provisional. Provisional records are never reconciled; they disappear on the
//! next full fetch.

use crate::filter::filter_by_name;
use crate::models::{Record, RecordId};

/// Lifecycle of a screen's initial fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocalList<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for LocalList<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> LocalList<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with the result of a full fetch.
    pub fn from_fetch(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_id(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| r.id() == Some(id))
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// Append the record a create request returned.
    ///
    /// Returns the identifier the record ended up with.
    pub fn append_created(&mut self, mut record: R, now_ms: u64) -> RecordId {
        let usable = match record.id() {
            Some(id) => !self.contains_id(id),
            None => false,
        };
        if !usable {
            let id = self.synthesize_id(now_ms);
            record.set_id(id);
            record.mark_provisional();
        }
        let id = record.id().cloned().unwrap_or(RecordId::Number(now_ms));
        self.records.push(record);
        id
    }

    /// Replace the entry with the same id as `record`.
    ///
    /// Returns `false` and leaves the list unchanged when `record` has no id or
    /// no entry matches it.
    pub fn replace_updated(&mut self, record: R) -> bool {
        let Some(id) = record.id().cloned() else {
            return false;
        };
        match self.records.iter_mut().find(|r| r.id() == Some(&id)) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Drop every entry with this id. Returns `false` if nothing matched.
    pub fn remove_by_id(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != Some(id));
        self.records.len() != before
    }

    /// The name-filtered view of this list.
    pub fn filtered(&self, term: &str) -> Vec<R> {
        filter_by_name(&self.records, term)
    }

    fn synthesize_id(&self, now_ms: u64) -> RecordId {
        let mut candidate = now_ms;
        while self.contains_id(&RecordId::Number(candidate)) {
            candidate += 1;
        }
        RecordId::Number(candidate)
    }
}

/// Milliseconds since the Unix epoch, platform-aware.
pub fn current_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(id: u64, name: &str) -> User {
        User {
            id: Some(id.into()),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            ..Default::default()
        }
    }

    fn seeded() -> LocalList<User> {
        LocalList::from_fetch(vec![user(1, "Ann"), user(2, "Bob"), user(3, "Cy")])
    }

    #[test]
    fn test_starts_empty() {
        let list = LocalList::<User>::new();
        assert!(list.is_empty());
        assert_eq!(LoadState::default(), LoadState::Loading);
    }

    #[test]
    fn test_replace_updated_swaps_only_the_match() {
        let mut list = seeded();
        let mut changed = user(2, "Robert");
        changed.phone = "5550000000".to_string();

        assert!(list.replace_updated(changed.clone()));

        let matching: Vec<&User> = list
            .records()
            .iter()
            .filter(|u| u.id == Some(RecordId::Number(2)))
            .collect();
        assert_eq!(matching, vec![&changed]);
        assert_eq!(list.records()[0], user(1, "Ann"));
        assert_eq!(list.records()[2], user(3, "Cy"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_replace_updated_without_match_is_noop() {
        let mut list = seeded();
        let before = list.clone();

        assert!(!list.replace_updated(user(42, "Ghost")));

        let mut no_id = user(1, "Nobody");
        no_id.id = None;
        assert!(!list.replace_updated(no_id));
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = seeded();
        assert!(list.remove_by_id(&RecordId::Number(2)));
        assert_eq!(list.len(), 2);
        assert!(!list.contains_id(&RecordId::Number(2)));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = seeded();
        let before = list.clone();
        assert!(!list.remove_by_id(&RecordId::Number(99)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_append_keeps_fresh_server_id() {
        let mut list = seeded();
        let id = list.append_created(user(11, "Dee"), 1_700_000_000_000);
        assert_eq!(id, RecordId::Number(11));
        let added = list.get(&id).unwrap();
        assert!(!added.provisional);
    }

    #[test]
    fn test_append_synthesizes_id_when_missing() {
        let mut list = seeded();
        let mut created = user(0, "Dee");
        created.id = None;

        let id = list.append_created(created, 1_700_000_000_000);

        assert_eq!(id, RecordId::Number(1_700_000_000_000));
        assert!(list.get(&id).unwrap().provisional);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_append_synthesizes_id_on_collision() {
        // Mock backends answer every create with the same id.
        let mut list = seeded();
        let first = list.append_created(user(11, "Dee"), 500);
        let second = list.append_created(user(11, "Eve"), 500);
        let third = list.append_created(user(11, "Fay"), 500);

        assert_eq!(first, RecordId::Number(11));
        assert_eq!(second, RecordId::Number(500));
        assert_eq!(third, RecordId::Number(501));
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_filtered_view_leaves_list_alone() {
        let list = seeded();
        let view = list.filtered("b");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Bob");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_from_fetch_drops_provisional_entries() {
        let mut list = seeded();
        let mut created = user(0, "Temp");
        created.id = None;
        list.append_created(created, 10);

        let list = LocalList::from_fetch(vec![user(1, "Ann")]);
        assert!(list.records().iter().all(|u| !u.provisional));
    }
}
