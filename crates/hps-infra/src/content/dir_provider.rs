use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hps_core::ports::ContentResolverPort;
use tokio::fs;

/// Content resolution backed by a provider directory.
///
/// A `content:` URI addresses a file relative to the provider root; the
/// display name is the entry's own file name. A URI with no path yields
/// no display name, which callers replace with their placeholder.
pub struct DirContentProvider {
    root: PathBuf,
}

impl DirContentProvider {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn relative_path(uri: &str) -> &str {
        let rest = uri.strip_prefix("content://").unwrap_or(uri);
        let rest = rest.strip_prefix("content:").unwrap_or(rest);
        rest.trim_start_matches('/')
    }

    fn resolve(&self, uri: &str) -> PathBuf {
        self.root.join(Self::relative_path(uri))
    }
}

#[async_trait]
impl ContentResolverPort for DirContentProvider {
    async fn display_name(&self, uri: &str) -> Result<Option<String>> {
        let rel = Self::relative_path(uri);
        Ok(rel
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_string))
    }

    async fn read(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.resolve(uri);
        fs::read(&path)
            .await
            .with_context(|| format!("read content {} failed", path.display()))
    }
}
