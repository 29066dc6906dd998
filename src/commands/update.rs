use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CellarError, Result};
use crate::model::{Wine, WineDetails};
use crate::store::{StorageBackend, WineStore};

/// Replace an existing record wholly with new details. `id` and
/// `date_added` carry over from the stored record; every other field comes
/// from `details`, including the ones the caller left at their defaults.
pub fn run<B: StorageBackend>(
    store: &WineStore<B>,
    id: &str,
    details: WineDetails,
) -> Result<CmdResult> {
    helpers::validate_details(&details)?;

    let existing = store
        .get_by_id(id)
        .ok_or_else(|| CellarError::WineNotFound(id.to_string()))?;
    let wine = Wine::from_parts(existing.id, existing.date_added, details);
    store.update(&wine)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Wine updated: {}", wine.name)));
    result.affected_wines.push(wine);
    Ok(result)
}
