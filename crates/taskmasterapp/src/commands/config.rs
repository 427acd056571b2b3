use crate::commands::{CmdMessage, CmdResult};
use crate::config::AppConfig;
use crate::error::{Result, TaskError};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = AppConfig::load(config_dir).unwrap_or_default();
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.config = Some(config);
        }
        ConfigAction::ShowKey(key) => match key.as_str() {
            "default-priority" => {
                result.add_message(CmdMessage::info(format!(
                    "default-priority = {}",
                    config.default_priority
                )));
            }
            _ => return Err(TaskError::Api(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => match key.as_str() {
            "default-priority" => {
                config.default_priority = value.parse().map_err(TaskError::Api)?;
                config.save(config_dir)?;
                result.add_message(CmdMessage::success(format!(
                    "default-priority = {}",
                    config.default_priority
                )));
            }
            _ => return Err(TaskError::Api(format!("Unknown config key: {}", key))),
        },
    }

    Ok(result)
}
