//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for any
//! client of the library. It dispatches, nothing more: business logic
//! belongs in `commands/*.rs`, persistence in `store/`, and presentation in
//! whatever sits on top.
//!
//! `CellarApi<B: StorageBackend>` is generic over the storage backend
//! (`FileBackend` in production, `MemBackend` in tests) so the whole
//! surface can be exercised without touching a real data directory.

use crate::commands;
use crate::config::SortOrder;
use crate::error::Result;
use crate::filter::WineFilters;
use crate::model::WineDetails;
use crate::store::{StorageBackend, WineStore};
use std::path::PathBuf;

pub struct CellarApi<B: StorageBackend> {
    store: WineStore<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> CellarApi<B> {
    pub fn new(backend: B, data_dir: PathBuf) -> Self {
        Self {
            store: WineStore::new(backend),
            data_dir,
        }
    }

    pub fn add_wine(&self, details: WineDetails) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, details)
    }

    pub fn list_wines(&self, sort: SortOrder) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, sort)
    }

    pub fn view_wine(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn search_wines(&self, query: &str, filters: &WineFilters) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, filters)
    }

    pub fn update_wine(&self, id: &str, details: WineDetails) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, id, details)
    }

    pub fn delete_wine(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn clear_collection(&self) -> Result<commands::CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn collection_stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, CollectionStats, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, MemBackend};

    fn api() -> CellarApi<MemBackend> {
        CellarApi::new(MemBackend::new(), PathBuf::from("unused"))
    }

    #[test]
    fn dispatches_add_and_list() {
        let api = api();
        api.add_wine(fixtures::sample_details("Barolo")).unwrap();

        let listed = api.list_wines(SortOrder::Added).unwrap().listed_wines;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Barolo");
    }

    #[test]
    fn dispatches_the_full_lifecycle() {
        let api = api();
        let id = api
            .add_wine(fixtures::sample_details("Lifecycle"))
            .unwrap()
            .affected_wines[0]
            .id
            .clone();

        api.update_wine(&id, fixtures::sample_details("Renamed"))
            .unwrap();
        assert_eq!(api.view_wine(&id).unwrap().listed_wines[0].name, "Renamed");

        api.delete_wine(&id).unwrap();
        assert!(api.view_wine(&id).is_err());

        api.clear_collection().unwrap();
        assert!(api
            .list_wines(SortOrder::Added)
            .unwrap()
            .listed_wines
            .is_empty());
    }
}
