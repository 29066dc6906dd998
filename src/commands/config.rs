use crate::commands::{CmdMessage, CmdResult};
use crate::config::{CellarConfig, SortOrder};
use crate::error::{CellarError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetSort(SortOrder),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.config = Some(CellarConfig::load(data_dir)?);
        }
        ConfigAction::ShowKey(key) => {
            if key != "sort" {
                return Err(CellarError::Api(format!("unknown config key: {}", key)));
            }
            result.config = Some(CellarConfig::load(data_dir)?);
        }
        ConfigAction::SetSort(sort) => {
            let mut config = CellarConfig::load(data_dir)?;
            config.sort = sort;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!("sort = {}", sort)));
        }
    }

    Ok(result)
}
