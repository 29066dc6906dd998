use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, WineStore};

pub fn run<B: StorageBackend>(store: &WineStore<B>) -> Result<CmdResult> {
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Wine collection cleared"));
    Ok(result)
}
