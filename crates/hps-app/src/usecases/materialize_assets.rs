use std::sync::Arc;

use anyhow::Result;
use hps_core::ports::{AssetMaterializerPort, MaterializeReport, SandboxDirsPort};
use log::debug;

use crate::startup::StartupState;

/// Copies the bundled asset categories into the documents root, at most
/// once per process. The once-guard lives on the composition root's
/// [`StartupState`]; later invocations report zero work.
pub struct MaterializeAssetsUseCase {
    sandbox_dirs: Arc<dyn SandboxDirsPort>,
    materializer: Arc<dyn AssetMaterializerPort>,
    startup: Arc<StartupState>,
}

impl MaterializeAssetsUseCase {
    pub fn new(
        sandbox_dirs: Arc<dyn SandboxDirsPort>,
        materializer: Arc<dyn AssetMaterializerPort>,
        startup: Arc<StartupState>,
    ) -> Self {
        Self {
            sandbox_dirs,
            materializer,
            startup,
        }
    }

    pub async fn execute(&self) -> Result<MaterializeReport> {
        if !self.startup.claim_assets_materialization() {
            debug!("bundled assets already materialized this process");
            return Ok(MaterializeReport::default());
        }

        let dirs = self.sandbox_dirs.get_sandbox_dirs()?;
        self.materializer.materialize(&dirs.documents_root).await
    }
}
