use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

/// Whole-file operations on the writable document area.
///
/// Copies are plain whole-file writes with no partial-write visibility
/// guarantee; the single screen flow is the only writer.
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    /// Case-insensitive check for a file of this name directly in `dir`.
    /// A missing directory simply reports false.
    async fn contains_filename(&self, dir: &Path, file_name: &str) -> bool;

    /// Copy `src` into `dest_dir` under its own name, replacing any
    /// previous file. Returns the destination path.
    async fn copy_into(&self, src: &Path, dest_dir: &Path) -> Result<PathBuf>;

    /// Write bytes to `dest_dir/file_name`, replacing any previous file.
    async fn write_bytes(&self, dest_dir: &Path, file_name: &str, bytes: &[u8])
        -> Result<PathBuf>;

    async fn remove(&self, path: &Path) -> Result<()>;
}
