use anyhow::Result;
use async_trait::async_trait;

/// Resolves managed-content references that are not plain filesystem
/// paths.
#[async_trait]
pub trait ContentResolverPort: Send + Sync {
    /// Display name recorded for the content, if the provider has one.
    async fn display_name(&self, uri: &str) -> Result<Option<String>>;

    /// The content's byte stream.
    async fn read(&self, uri: &str) -> Result<Vec<u8>>;
}
