use super::backend::StorageBackend;
use crate::error::{Result, TaskError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one `<key>.json` file per entry in the data directory.
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(TaskError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TaskError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.entry_path(key);

        // Atomic write
        let tmp = self.data_dir.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(TaskError::Io)?;
        fs::rename(&tmp, target).map_err(TaskError::Io)?;

        Ok(())
    }
}
