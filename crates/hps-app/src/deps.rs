use std::sync::Arc;

use hps_core::ports::{
    AssetMaterializerPort, ContentResolverPort, DocumentStorePort, DownloadManagerPort,
    FileCatalogPort, NoticePort, SandboxDirsPort, SettingsPort, ViewerBridgePort,
    ViewerStateStorePort,
};

/// Everything the application needs, grouped. This constructor-style
/// struct is the dependency manifest: all ports must be provided.
#[derive(Clone)]
pub struct AppDeps {
    pub sandbox_dirs: Arc<dyn SandboxDirsPort>,
    pub asset_materializer: Arc<dyn AssetMaterializerPort>,
    pub catalog: Arc<dyn FileCatalogPort>,
    pub document_store: Arc<dyn DocumentStorePort>,
    pub downloads: Arc<dyn DownloadManagerPort>,
    pub content_resolver: Arc<dyn ContentResolverPort>,
    pub viewer_bridge: Arc<dyn ViewerBridgePort>,
    pub viewer_state: Arc<dyn ViewerStateStorePort>,
    pub settings: Arc<dyn SettingsPort>,
    pub notices: Arc<dyn NoticePort>,
}
