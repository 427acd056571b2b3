use crate::error::{Result, TaskError};
use crate::model::Priority;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for taskmaster, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Priority assigned to new tasks when none is given
    #[serde(default)]
    pub default_priority: Priority,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::Medium,
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskError::Io)?;
        let config: AppConfig = serde_json::from_str(&content).map_err(TaskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaskError::Serialization)?;
        fs::write(config_path, content).map_err(TaskError::Io)?;
        Ok(())
    }

    /// All known keys with their current values, for display.
    pub fn list_all(&self) -> Vec<(String, String)> {
        vec![(
            "default-priority".to_string(),
            self.default_priority.to_string(),
        )]
    }
}
