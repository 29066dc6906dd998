use crate::commands::CmdResult;
use crate::config::SortOrder;
use crate::error::Result;
use crate::store::{StorageBackend, WineStore};

pub fn run<B: StorageBackend>(store: &WineStore<B>, sort: SortOrder) -> Result<CmdResult> {
    let mut wines = store.get_all();
    if sort == SortOrder::Name {
        wines.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
    Ok(CmdResult::default().with_listed_wines(wines))
}
