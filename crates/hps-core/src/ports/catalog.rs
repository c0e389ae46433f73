use anyhow::Result;
use async_trait::async_trait;

use crate::document::DocumentEntry;
use crate::formats::SupportedExtensionSet;
use crate::sandbox_dirs::SandboxDirs;

/// Scans the sample and document roots for openable files.
///
/// Entries come back samples first, then documents, each root in
/// filesystem enumeration order. Missing roots contribute nothing; they
/// are not an error.
#[async_trait]
pub trait FileCatalogPort: Send + Sync {
    async fn list_openable(
        &self,
        dirs: &SandboxDirs,
        formats: &SupportedExtensionSet,
    ) -> Result<Vec<DocumentEntry>>;
}
