use std::sync::Arc;

use anyhow::Result;
use hps_core::{
    document::DocumentEntry,
    formats::SupportedExtensionSet,
    ports::{FileCatalogPort, SandboxDirsPort, ViewerBridgePort},
};

/// Lists the openable files the browser screen shows: samples first,
/// then user documents. The active extension set is probed from the
/// viewer bridge, so exchange formats appear only when the importer is
/// actually linked in.
pub struct ListDocumentsUseCase {
    sandbox_dirs: Arc<dyn SandboxDirsPort>,
    catalog: Arc<dyn FileCatalogPort>,
    viewer_bridge: Arc<dyn ViewerBridgePort>,
}

impl ListDocumentsUseCase {
    pub fn new(
        sandbox_dirs: Arc<dyn SandboxDirsPort>,
        catalog: Arc<dyn FileCatalogPort>,
        viewer_bridge: Arc<dyn ViewerBridgePort>,
    ) -> Self {
        Self {
            sandbox_dirs,
            catalog,
            viewer_bridge,
        }
    }

    pub fn active_formats(&self) -> SupportedExtensionSet {
        if self.viewer_bridge.supports_exchange_import() {
            SupportedExtensionSet::with_exchange()
        } else {
            SupportedExtensionSet::base_only()
        }
    }

    pub async fn execute(&self) -> Result<Vec<DocumentEntry>> {
        let dirs = self.sandbox_dirs.get_sandbox_dirs()?;
        let formats = self.active_formats();
        self.catalog.list_openable(&dirs, &formats).await
    }
}
