//! Record list persistence
//!
//! [`RecordStore`] owns the in-memory record list and the storage backend it
//! mirrors. The persisted entry is always the full list as a JSON array; there
//! is no partial write or merge.

use crate::error::FormError;
use crate::record::ContactRecord;
use veloce_storage::{KeyValueStore, StorageError};

/// Append-only record list mirrored to one storage entry
#[derive(Debug)]
pub struct RecordStore<S> {
    backend: S,
    key: String,
    records: Vec<ContactRecord>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Create an empty list bound to `key` in `backend`
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    #[must_use]
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            records: Vec::new(),
        }
    }

    /// Replace the in-memory list with the persisted snapshot
    ///
    /// An absent entry yields an empty list. A malformed entry also leaves
    /// the list empty and reports [`StorageError::Malformed`].
    pub fn load(&mut self) -> Result<usize, FormError> {
        self.records.clear();

        let Some(raw) = self.backend.get_item(&self.key)? else {
            tracing::debug!("No stored records under '{}'", self.key);
            return Ok(0);
        };

        let records: Vec<ContactRecord> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Malformed {
                key: self.key.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!("Loaded {} stored records", records.len());
        self.records = records;
        Ok(self.records.len())
    }

    /// Write the full in-memory list, replacing the stored snapshot
    pub fn save(&mut self) -> Result<(), FormError> {
        let encoded = serde_json::to_string(&self.records)?;
        self.backend.set_item(&self.key, &encoded)?;
        tracing::debug!("Saved {} records under '{}'", self.records.len(), self.key);
        Ok(())
    }

    /// Append a record and persist the list
    ///
    /// On a failed write the record is dropped again so the list still equals
    /// the last persisted snapshot.
    pub fn append(&mut self, record: ContactRecord) -> Result<(), FormError> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            tracing::error!("Persisting record failed: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Records in submission order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are held
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Storage entry key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage backend
    #[inline]
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Give back the storage backend
    #[inline]
    #[must_use]
    pub fn into_backend(self) -> S {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use veloce_storage::MemoryStore;

    mock! {
        Backend {}

        impl KeyValueStore for Backend {
            fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
            fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
            fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
        }
    }

    fn record(name: &str) -> ContactRecord {
        ContactRecord::new(name, "a@b.com", "Hello", "0123456789", "1/1/2026, 9:00:00 AM")
    }

    #[test]
    fn load_absent_entry_is_empty() {
        let mut store = RecordStore::new(MemoryStore::new(), "k");
        assert_eq!(store.load().unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn load_reads_snapshot() {
        let json = serde_json::to_string(&vec![record("Ada"), record("Bob")]).unwrap();
        let mut store = RecordStore::new(MemoryStore::with_entry("k", json), "k");

        assert_eq!(store.load().unwrap(), 2);
        assert_eq!(store.records()[1].name, "Bob");
    }

    #[test]
    fn load_malformed_leaves_list_empty() {
        let mut store = RecordStore::new(MemoryStore::with_entry("k", "{not json"), "k");
        store.records.push(record("Stale"));

        let err = store.load().unwrap_err();
        assert!(err.is_malformed_storage());
        assert!(store.is_empty());
    }

    #[test]
    fn load_rejects_non_array_json() {
        let mut store = RecordStore::new(MemoryStore::with_entry("k", "null"), "k");
        assert!(store.load().unwrap_err().is_malformed_storage());
    }

    #[test]
    fn append_persists_full_list() {
        let mut store = RecordStore::new(MemoryStore::new(), "k");
        store.append(record("Ada")).unwrap();
        store.append(record("Ada")).unwrap();

        let persisted: Vec<ContactRecord> =
            serde_json::from_str(store.backend().peek("k").unwrap()).unwrap();
        assert_eq!(persisted, store.records());
        assert_eq!(persisted.len(), 2);
    }

    #[test]
    fn append_rolls_back_on_write_failure() {
        let mut backend = MockBackend::new();
        backend
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(StorageError::Unavailable("quota exceeded".to_string())));

        let mut store = RecordStore::new(backend, "k");
        let err = store.append(record("Ada")).unwrap_err();

        assert!(matches!(err, FormError::Storage(StorageError::Unavailable(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn save_writes_under_configured_key() {
        let mut backend = MockBackend::new();
        backend
            .expect_set_item()
            .withf(|key, value| key.to_string() == "veloceCredentials" && value.to_string() == "[]")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = RecordStore::new(backend, "veloceCredentials");
        store.save().unwrap();
    }
}
