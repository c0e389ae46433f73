use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use hps_core::ports::DocumentStorePort;
use log::info;
use tokio::fs;

use crate::fs::copy;

/// Document-store operations over the real filesystem.
pub struct FsDocumentStore;

impl FsDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStorePort for FsDocumentStore {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn contains_filename(&self, dir: &Path, file_name: &str) -> bool {
        copy::filename_in_directory(file_name, dir).await
    }

    async fn copy_into(&self, src: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let name = src
            .file_name()
            .with_context(|| format!("{} has no file name", src.display()))?;
        fs::create_dir_all(dest_dir)
            .await
            .with_context(|| format!("create {} failed", dest_dir.display()))?;
        let dest = dest_dir.join(name);
        copy::copy_file(src, &dest).await?;
        info!("copied {} into {}", src.display(), dest_dir.display());
        Ok(dest)
    }

    async fn write_bytes(
        &self,
        dest_dir: &Path,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf> {
        fs::create_dir_all(dest_dir)
            .await
            .with_context(|| format!("create {} failed", dest_dir.display()))?;
        let dest = dest_dir.join(file_name);
        copy::write_file(&dest, bytes).await?;
        info!("stored {} bytes at {}", bytes.len(), dest.display());
        Ok(dest)
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        if fs::try_exists(path).await.unwrap_or(false) {
            fs::remove_file(path)
                .await
                .with_context(|| format!("remove {} failed", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copy_into_keeps_the_source_name() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("part.hsf");
        std::fs::write(&src, b"model").unwrap();
        let docs = dir.path().join("HPSSandbox");

        let store = FsDocumentStore::new();
        let dest = store.copy_into(&src, &docs).await.unwrap();

        assert_eq!(dest, docs.join("part.hsf"));
        assert_eq!(std::fs::read(dest).unwrap(), b"model");
    }

    #[tokio::test]
    async fn write_bytes_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new();

        store
            .write_bytes(dir.path(), "a.stl", b"first")
            .await
            .unwrap();
        let dest = store
            .write_bytes(dir.path(), "a.stl", b"second")
            .await
            .unwrap();

        assert_eq!(std::fs::read(dest).unwrap(), b"second");
    }

    #[tokio::test]
    async fn remove_tolerates_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new();
        store.remove(&dir.path().join("gone.hsf")).await.unwrap();
    }
}
