use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Wine, WineDetails};
use crate::store::{StorageBackend, WineStore};

pub fn run<B: StorageBackend>(store: &WineStore<B>, details: WineDetails) -> Result<CmdResult> {
    helpers::validate_details(&details)?;

    let wine = Wine::new(details);
    store.add(&wine)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added to cellar: {} ({})",
        wine.name, wine.producer
    )));
    result.affected_wines.push(wine);
    Ok(result)
}
