use std::sync::Arc;

use anyhow::Result;
use hps_core::ports::{MaterializeReport, SandboxDirsPort, ViewerBridgePort};

use crate::usecases::MaterializeAssetsUseCase;

/// Startup orchestration for the browsing screen: materialize bundled
/// assets (once per process) and point the viewer at its font and
/// material directories.
pub struct StartAppUseCase {
    sandbox_dirs: Arc<dyn SandboxDirsPort>,
    viewer_bridge: Arc<dyn ViewerBridgePort>,
    materialize_assets: MaterializeAssetsUseCase,
}

impl StartAppUseCase {
    pub fn new(
        sandbox_dirs: Arc<dyn SandboxDirsPort>,
        viewer_bridge: Arc<dyn ViewerBridgePort>,
        materialize_assets: MaterializeAssetsUseCase,
    ) -> Self {
        Self {
            sandbox_dirs,
            viewer_bridge,
            materialize_assets,
        }
    }

    pub async fn execute(&self) -> Result<MaterializeReport> {
        let report = self.materialize_assets.execute().await?;

        let dirs = self.sandbox_dirs.get_sandbox_dirs()?;
        self.viewer_bridge.set_font_directory(&dirs.fonts_dir);
        self.viewer_bridge.set_materials_directory(&dirs.materials_dir);

        Ok(report)
    }
}
