use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use taskboard_core::{TaskboardError, TaskboardResult};

/// One file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Keys map straight to file names, so only ASCII
    /// alphanumerics, `-` and `_` are accepted.
    pub fn path_for(&self, key: &str) -> TaskboardResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TaskboardError::Validation(format!(
                "Invalid record key: {:?}",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> TaskboardResult<Option<String>> {
        AtomicWriter::read_optional(&self.path_for(key)?).await
    }

    async fn set(&self, key: &str, value: &str) -> TaskboardResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value.as_bytes()).await?;
        tracing::info!("Saved record {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskboardResult<()> {
        AtomicWriter::remove(&self.path_for(key)?).await
    }
}
