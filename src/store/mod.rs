//! # Storage Layer
//!
//! The collection lives as one JSON array under one key of a key-value
//! capability. [`StorageBackend`] abstracts that capability so the
//! [`WineStore`] can run against the filesystem in production and against
//! an in-memory fake in tests, without the business logic knowing which.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one `<key>.json` file per key
//!   under a data directory, atomic writes
//! - [`memory::MemBackend`]: in-memory storage for testing, with optional
//!   write-error simulation
//!
//! ## Read/write contract
//!
//! Reads fail soft: a missing key, an unreadable value, or a backend read
//! error all come back as an empty collection; the caller observes "no
//! wines", never an error. Writes are the opposite: any backend failure on
//! a mutation propagates to the caller, which owns user-visible messaging.
//! Every mutation is a full read-modify-write of the document; there is no
//! locking and the last write wins, which is acceptable for a single-writer
//! catalogue.

use crate::error::{CellarError, Result};
use crate::model::Wine;
use log::warn;

pub mod fs;
pub mod memory;

/// Storage key holding the serialized collection. No other component may
/// write to this key.
pub const COLLECTION_KEY: &str = "wine_collection";

/// Abstract interface for the key-value storage capability.
///
/// All three operations are independently failable. `get` distinguishes
/// "absent" (`Ok(None)`) from an actual read failure (`Err`).
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Durable CRUD over the list of wines, backed by one serialized document.
pub struct WineStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> WineStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read and deserialize the whole collection.
    ///
    /// Missing key, undecodable document, and backend read failure all
    /// degrade to an empty collection. The two failure branches are logged
    /// so corruption stays observable.
    pub fn get_all(&self) -> Vec<Wine> {
        let raw = match self.backend.get(COLLECTION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read wine collection: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(wines) => wines,
            Err(err) => {
                warn!("discarding unreadable wine collection: {}", err);
                Vec::new()
            }
        }
    }

    /// Linear search by id. `None` when no record matches.
    pub fn get_by_id(&self, id: &str) -> Option<Wine> {
        self.get_all().into_iter().find(|wine| wine.id == id)
    }

    /// Append a record and write the collection back.
    ///
    /// The record must already carry its id and `date_added`; the store
    /// performs no uniqueness check (single-writer simplification).
    pub fn add(&self, wine: &Wine) -> Result<()> {
        let mut wines = self.get_all();
        wines.push(wine.clone());
        self.write(&wines)
    }

    /// Wholly replace the record whose id matches `wine.id`.
    ///
    /// Unlike reads, a missing id here is a real failure and propagates.
    pub fn update(&self, wine: &Wine) -> Result<()> {
        let mut wines = self.get_all();
        let slot = wines
            .iter_mut()
            .find(|existing| existing.id == wine.id)
            .ok_or_else(|| CellarError::WineNotFound(wine.id.clone()))?;
        *slot = wine.clone();
        self.write(&wines)
    }

    /// Remove the record with the given id. Idempotent: an absent id is a
    /// successful no-op.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut wines = self.get_all();
        wines.retain(|wine| wine.id != id);
        self.write(&wines)
    }

    /// Remove the storage key entirely, emptying the collection.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(COLLECTION_KEY)
    }

    fn write(&self, wines: &[Wine]) -> Result<()> {
        let raw = serde_json::to_string(wines)?;
        self.backend.set(COLLECTION_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::{fixtures, MemBackend};
    use super::*;
    use crate::model::{WineDetails, WineType};

    fn store() -> WineStore<MemBackend> {
        WineStore::new(MemBackend::new())
    }

    #[test]
    fn fresh_store_reads_empty() {
        assert!(store().get_all().is_empty());
    }

    #[test]
    fn add_then_get_by_id_round_trips() {
        let store = store();
        let wine = fixtures::sample_wine("Opus One");
        store.add(&wine).unwrap();

        assert_eq!(store.get_by_id(&wine.id), Some(wine));
    }

    #[test]
    fn get_by_id_misses_softly() {
        assert_eq!(store().get_by_id("nope"), None);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = store();
        store.add(&fixtures::sample_wine("First")).unwrap();
        store.add(&fixtures::sample_wine("Second")).unwrap();

        let names: Vec<_> = store.get_all().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn update_replaces_wholly() {
        let store = store();
        let wine = fixtures::sample_wine("Before");
        store.add(&wine).unwrap();

        let replacement = Wine::from_parts(
            wine.id.clone(),
            wine.date_added,
            WineDetails {
                name: "After".into(),
                producer: "New Producer".into(),
                wine_type: WineType::White,
                rating: 5,
                ..Default::default()
            },
        );
        store.update(&replacement).unwrap();

        let stored = store.get_by_id(&wine.id).unwrap();
        assert_eq!(stored, replacement);
        assert_eq!(stored.notes, "");
    }

    #[test]
    fn update_unknown_id_fails() {
        let store = store();
        let wine = fixtures::sample_wine("Ghost");
        let err = store.update(&wine).unwrap_err();
        assert!(matches!(err, CellarError::WineNotFound(id) if id == wine.id));
    }

    #[test]
    fn delete_removes_only_the_match() {
        let store = store();
        let keep = fixtures::sample_wine("Keep");
        let drop = fixtures::sample_wine("Drop");
        store.add(&keep).unwrap();
        store.add(&drop).unwrap();

        store.delete(&drop.id).unwrap();
        let remaining = store.get_all();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }

    #[test]
    fn delete_absent_id_is_a_no_op() {
        let store = store();
        store.add(&fixtures::sample_wine("Kept")).unwrap();

        store.delete("absent").unwrap();
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn clear_empties_the_collection() {
        let store = store();
        store.add(&fixtures::sample_wine("A")).unwrap();
        store.add(&fixtures::sample_wine("B")).unwrap();

        store.clear().unwrap();
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn corrupt_document_reads_as_empty() {
        let backend = MemBackend::new();
        backend.set(COLLECTION_KEY, "{not json").unwrap();
        let store = WineStore::new(backend);

        assert!(store.get_all().is_empty());
    }

    #[test]
    fn corrupt_document_is_replaced_on_next_write() {
        let backend = MemBackend::new();
        backend.set(COLLECTION_KEY, "[[[").unwrap();
        let store = WineStore::new(backend);

        let wine = fixtures::sample_wine("Fresh Start");
        store.add(&wine).unwrap();
        assert_eq!(store.get_all(), vec![wine]);
    }

    #[test]
    fn write_failure_propagates_from_mutations() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let store = WineStore::new(backend);

        let err = store.add(&fixtures::sample_wine("Doomed")).unwrap_err();
        assert!(matches!(err, CellarError::Storage(_)));
    }
}
