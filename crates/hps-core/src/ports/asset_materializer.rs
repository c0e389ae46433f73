use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// What a materialization pass actually did. Per-file I/O failures are
/// counted here rather than propagated; they never abort the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub files_copied: usize,
    pub files_skipped: usize,
    pub failures: usize,
}

impl MaterializeReport {
    pub fn merge(&mut self, other: MaterializeReport) {
        self.files_copied += other.files_copied;
        self.files_skipped += other.files_skipped;
        self.failures += other.failures;
    }
}

/// Copies the bundled asset categories into the writable document area.
#[async_trait]
pub trait AssetMaterializerPort: Send + Sync {
    async fn materialize(&self, target_root: &Path) -> Result<MaterializeReport>;
}
