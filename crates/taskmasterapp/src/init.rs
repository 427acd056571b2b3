use crate::api::TaskApi;
use crate::config::AppConfig;
use crate::store::{FileStore, FsBackend};
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct AppContext {
    pub api: TaskApi<FsBackend>,
    pub config: AppConfig,
}

/// Resolve the data directory: an explicit override wins, otherwise the
/// OS-appropriate location from `directories`.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = data_override {
        return dir;
    }

    ProjectDirs::from("com", "taskmaster", "taskmaster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".taskmaster"))
}

pub fn initialize(data_override: Option<PathBuf>) -> AppContext {
    let data_dir = resolve_data_dir(data_override);
    let config = AppConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone());
    let api = TaskApi::new(store, data_dir);

    AppContext { api, config }
}
