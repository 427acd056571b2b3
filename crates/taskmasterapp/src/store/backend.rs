use crate::error::Result;

/// Abstract interface for raw key-value storage I/O.
/// This trait handles the "how" of persistence (filesystem vs memory),
/// while [`crate::store::TaskStore`] handles the "what" (task list, theme).
pub trait StorageBackend {
    /// Read the raw value stored under a key.
    /// Returns Ok(None) if the key has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under a key, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) so a crash mid-write
    /// never leaves a half-serialized entry behind.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
