use crate::commands::CmdResult;
use crate::error::{CellarError, Result};
use crate::store::{StorageBackend, WineStore};

pub fn run<B: StorageBackend>(store: &WineStore<B>, id: &str) -> Result<CmdResult> {
    let wine = store
        .get_by_id(id)
        .ok_or_else(|| CellarError::WineNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_wines(vec![wine]))
}
