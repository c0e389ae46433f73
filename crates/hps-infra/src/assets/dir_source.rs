use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hps_core::ports::AssetSourcePort;
use tokio::fs;

/// Bundled assets read from a directory shipped next to the binary.
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl AssetSourcePort for DirAssetSource {
    /// Children of `path`, sorted for deterministic traversal. A path
    /// that is a plain file (or absent) lists as empty, marking a leaf.
    async fn list(&self, path: &str) -> Result<Vec<String>> {
        let full = self.root.join(path);
        let mut entries = match fs::read_dir(&full).await {
            Ok(entries) => entries,
            Err(_) => return Ok(Vec::new()),
        };
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        fs::read(&full)
            .await
            .with_context(|| format!("read asset {} failed", full.display()))
    }
}
