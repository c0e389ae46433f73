use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use hps_core::ports::{AssetMaterializerPort, AssetSourcePort, MaterializeReport};
use hps_core::sandbox_dirs::{FONTS_DIR_NAME, MATERIALS_DIR_NAME, SAMPLES_DIR_NAME};
use log::{error, info};
use tokio::fs;
use tracing::{debug_span, Instrument};

/// The bundled categories copied into the document area on first run.
pub const BUNDLED_CATEGORIES: [&str; 3] = [SAMPLES_DIR_NAME, FONTS_DIR_NAME, MATERIALS_DIR_NAME];

/// Copies bundled asset trees into the writable document area.
///
/// Existing files are skipped unless overwrite is set, so re-running
/// against an already-populated target copies nothing. A failure on one
/// file is logged and counted; siblings and other categories still copy.
pub struct AssetMaterializer<S>
where
    S: AssetSourcePort,
{
    source: S,
    overwrite_existing: bool,
}

impl<S> AssetMaterializer<S>
where
    S: AssetSourcePort,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            overwrite_existing: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite_existing: bool) -> Self {
        self.overwrite_existing = overwrite_existing;
        self
    }

    /// Copy a file or directory tree at `path` (relative to the asset
    /// source) under `target_root`, preserving relative structure. An
    /// empty listing marks a leaf file.
    fn copy_tree<'a>(
        &'a self,
        path: String,
        target_root: &'a Path,
    ) -> BoxFuture<'a, MaterializeReport> {
        Box::pin(async move {
            let mut report = MaterializeReport::default();

            let children = match self.source.list(&path).await {
                Ok(children) => children,
                Err(err) => {
                    error!("listing asset {path} failed: {err:#}");
                    report.failures += 1;
                    return report;
                }
            };

            if children.is_empty() {
                report.merge(self.copy_leaf(&path, target_root).await);
                return report;
            }

            let target_dir = target_root.join(&path);
            if let Err(err) = fs::create_dir_all(&target_dir).await {
                error!("creating {} failed: {err}", target_dir.display());
                report.failures += 1;
                return report;
            }
            for child in children {
                report.merge(self.copy_tree(format!("{path}/{child}"), target_root).await);
            }
            report
        })
    }

    async fn copy_leaf(&self, path: &str, target_root: &Path) -> MaterializeReport {
        let mut report = MaterializeReport::default();
        let target = target_root.join(path);

        if !self.overwrite_existing && fs::try_exists(&target).await.unwrap_or(false) {
            report.files_skipped += 1;
            return report;
        }

        let bytes = match self.source.read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("reading asset {path} failed: {err:#}");
                report.failures += 1;
                return report;
            }
        };
        match fs::write(&target, &bytes).await {
            Ok(()) => report.files_copied += 1,
            Err(err) => {
                error!("writing {} failed: {err}", target.display());
                report.failures += 1;
            }
        }
        report
    }
}

#[async_trait]
impl<S> AssetMaterializerPort for AssetMaterializer<S>
where
    S: AssetSourcePort,
{
    async fn materialize(&self, target_root: &Path) -> Result<MaterializeReport> {
        let span = debug_span!(
            "infra.assets.materialize",
            target = %target_root.display(),
        );
        async {
            fs::create_dir_all(target_root).await?;
            let top_level = self.source.list("").await?;

            let mut report = MaterializeReport::default();
            for category in BUNDLED_CATEGORIES {
                if !top_level.iter().any(|entry| entry == category) {
                    continue;
                }
                report.merge(self.copy_tree(category.to_string(), target_root).await);
                info!("{category} copied to {}", target_root.display());
            }
            Ok(report)
        }
        .instrument(span)
        .await
    }
}
