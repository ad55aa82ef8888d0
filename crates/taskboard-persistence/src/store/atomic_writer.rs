use std::io::ErrorKind;
use std::path::Path;
use taskboard_core::TaskboardResult;
use tokio::fs;

/// Write-to-temp-then-rename file access, so a crash mid-save never leaves a
/// half-written record behind.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Replace the contents of `path`. Missing parent directories are created.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TaskboardResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;

        // Same directory as the target so the rename stays on one filesystem
        let temp_path = tempfile::NamedTempFile::new_in(parent)?.into_temp_path();
        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Contents of `path`, or `None` if the file does not exist.
    pub async fn read_optional(path: &Path) -> TaskboardResult<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete `path`; a missing file counts as deleted.
    pub async fn remove(path: &Path) -> TaskboardResult<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
