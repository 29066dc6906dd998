use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, WineStore};

/// Remove a wine by id. Deleting an id that is not in the collection is a
/// successful no-op; the result message says which of the two happened.
pub fn run<B: StorageBackend>(store: &WineStore<B>, id: &str) -> Result<CmdResult> {
    let existing = store.get_by_id(id);
    store.delete(id)?;

    let mut result = CmdResult::default();
    match existing {
        Some(wine) => {
            result.add_message(CmdMessage::success(format!("Wine removed: {}", wine.name)));
            result.affected_wines.push(wine);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "No wine with id {}; nothing to remove",
                id
            )));
        }
    }
    Ok(result)
}
