//! Ordered record store
//!
//! Records live in an insertion-ordered arena keyed by [`RecordKey`]. Positions
//! compact immediately on removal, while keys stay stable, so a UI event that
//! carries a key resolves to the right row even when two records are identical.

use indexmap::IndexMap;

use crate::error::{RosterError, RosterResult};
use crate::types::{ChangeEvent, Record, RecordKey};

/// Ordered, mutable collection of records
#[derive(Debug, Default)]
pub struct RecordStore {
    records: IndexMap<RecordKey, Record>,
    next_key: u64,
    /// Events queued since the last `take_events`
    pending: Vec<ChangeEvent>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the end, returning the new key and index.
    pub fn append(&mut self, record: Record) -> (RecordKey, usize) {
        self.next_key += 1;
        let key = RecordKey::new(self.next_key);
        let (index, _) = self.records.insert_full(key, record);
        log::debug!("Inserted record {key} at index {index}");
        self.pending.push(ChangeEvent::inserted(index, key));
        (key, index)
    }

    /// Remove and return the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> RosterResult<Record> {
        let len = self.records.len();
        let (key, record) = self
            .records
            .shift_remove_index(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })?;
        log::debug!("Removed record {key} from index {index}");
        self.pending.push(ChangeEvent::removed(index, key));
        Ok(record)
    }

    /// Remove the record with `key`, returning the index it occupied.
    pub fn remove(&mut self, key: RecordKey) -> RosterResult<(usize, Record)> {
        let (index, _, record) = self
            .records
            .shift_remove_full(&key)
            .ok_or(RosterError::RecordNotFound(key))?;
        log::debug!("Removed record {key} from index {index}");
        self.pending.push(ChangeEvent::removed(index, key));
        Ok((index, record))
    }

    /// Replace the name of the record with `key`; the student id is never touched.
    pub fn rename(&mut self, key: RecordKey, name: impl Into<String>) -> RosterResult<usize> {
        let (index, _, record) = self
            .records
            .get_full_mut(&key)
            .ok_or(RosterError::RecordNotFound(key))?;
        record.name = name.into();
        log::debug!("Renamed record {key} at index {index}");
        self.pending.push(ChangeEvent::changed(index, key));
        Ok(index)
    }

    /// Position of the first record structurally equal to `record`.
    ///
    /// With duplicates present this always resolves to the first match; prefer
    /// [`index_of_key`](Self::index_of_key) when a key is available.
    pub fn index_of(&self, record: &Record) -> Option<usize> {
        self.records.values().position(|r| r == record)
    }

    /// Current position of `key`
    pub fn index_of_key(&self, key: RecordKey) -> Option<usize> {
        self.records.get_index_of(&key)
    }

    /// Key of the record at `index`
    pub fn key_at(&self, index: usize) -> Option<RecordKey> {
        self.records.get_index(index).map(|(key, _)| *key)
    }

    /// Record at `index`
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get_index(index).map(|(_, record)| record)
    }

    /// Record with `key`
    pub fn get_by_key(&self, key: RecordKey) -> Option<&Record> {
        self.records.get(&key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(key, record)` pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (RecordKey, &Record)> + '_ {
        self.records.iter().map(|(key, record)| (*key, record))
    }

    /// Drain the events queued by mutations, oldest first.
    pub fn take_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeKind;

    fn store_with(names: &[(&str, &str)]) -> RecordStore {
        let mut store = RecordStore::new();
        for (id, name) in names {
            store.append(Record::new(*id, *name));
        }
        store.take_events();
        store
    }

    #[test]
    fn test_append_returns_index_and_event() {
        let mut store = RecordStore::new();
        let (k1, i1) = store.append(Record::new("SV01", "Alice"));
        let (k2, i2) = store.append(Record::new("SV02", "Bob"));

        assert_eq!((i1, i2), (0, 1));
        assert_ne!(k1, k2);
        assert_eq!(
            store.take_events(),
            vec![ChangeEvent::inserted(0, k1), ChangeEvent::inserted(1, k2)]
        );
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_remove_at_compacts_indices() {
        let mut store = store_with(&[("SV01", "Alice"), ("SV02", "Bob"), ("SV03", "Carol")]);
        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed, Record::new("SV02", "Bob"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(&Record::new("SV03", "Carol")));

        let events = store.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ChangeKind::Removed);
        assert_eq!(events[0].index, 1);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = store_with(&[("SV01", "Alice")]);
        assert_eq!(
            store.remove_at(5),
            Err(RosterError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert!(store.take_events().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_index_of_resolves_first_duplicate() {
        let store = store_with(&[("SV01", "Alice"), ("SV02", "Bob"), ("SV01", "Alice")]);
        assert_eq!(store.index_of(&Record::new("SV01", "Alice")), Some(0));
        assert_eq!(store.index_of(&Record::new("SV09", "Nobody")), None);
    }

    #[test]
    fn test_keys_disambiguate_duplicates() {
        let mut store = store_with(&[("SV01", "Alice"), ("SV01", "Alice")]);
        let second = store.key_at(1).unwrap();

        let (index, _) = store.remove(second).unwrap();
        assert_eq!(index, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.index_of_key(second), None);
    }

    #[test]
    fn test_keys_are_not_reused() {
        let mut store = RecordStore::new();
        let (first, _) = store.append(Record::new("SV01", "Alice"));
        store.remove(first).unwrap();
        let (second, _) = store.append(Record::new("SV01", "Alice"));
        assert!(second > first);
        assert!(store.get_by_key(first).is_none());
    }

    #[test]
    fn test_rename_only_touches_name() {
        let mut store = store_with(&[("SV01", "Alice"), ("SV02", "Bob")]);
        let key = store.key_at(1).unwrap();

        let index = store.rename(key, "Robert").unwrap();
        assert_eq!(index, 1);
        assert_eq!(store.get(1), Some(&Record::new("SV02", "Robert")));
        assert_eq!(store.take_events(), vec![ChangeEvent::changed(1, key)]);
    }

    #[test]
    fn test_rename_missing_key() {
        let mut store = RecordStore::new();
        let missing = RecordKey::new(42);
        assert_eq!(
            store.rename(missing, "x"),
            Err(RosterError::RecordNotFound(missing))
        );
    }
}
