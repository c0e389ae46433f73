use anyhow::Result;
use async_trait::async_trait;

/// Read-only source of bundled assets.
///
/// Paths are relative to the asset root, `/`-separated. A path whose
/// listing comes back empty is a leaf file; everything else is a
/// directory to recurse into.
#[async_trait]
pub trait AssetSourcePort: Send + Sync {
    async fn list(&self, path: &str) -> Result<Vec<String>>;

    async fn read(&self, path: &str) -> Result<Vec<u8>>;
}
