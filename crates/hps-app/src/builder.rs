use std::sync::Arc;

use anyhow::Result;
use hps_core::ports::{
    AssetMaterializerPort, ContentResolverPort, DocumentStorePort, DownloadManagerPort,
    FileCatalogPort, NoticePort, SandboxDirsPort, SettingsPort, ViewerBridgePort,
    ViewerStateStorePort,
};

use crate::deps::AppDeps;
use crate::startup::StartupState;
use crate::usecases::{
    ListDocumentsUseCase, MaterializeAssetsUseCase, OpenDocumentUseCase, StartAppUseCase,
};

/// The application runtime: the full port set plus process-lifetime
/// startup state.
pub struct App {
    deps: AppDeps,
    startup: Arc<StartupState>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            startup: Arc::new(StartupState::new()),
        }
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn startup(&self) -> &StartupState {
        &self.startup
    }

    pub fn start_app(&self) -> StartAppUseCase {
        StartAppUseCase::new(
            self.deps.sandbox_dirs.clone(),
            self.deps.viewer_bridge.clone(),
            self.materialize_assets(),
        )
    }

    pub fn materialize_assets(&self) -> MaterializeAssetsUseCase {
        MaterializeAssetsUseCase::new(
            self.deps.sandbox_dirs.clone(),
            self.deps.asset_materializer.clone(),
            self.startup.clone(),
        )
    }

    pub fn list_documents(&self) -> ListDocumentsUseCase {
        ListDocumentsUseCase::new(
            self.deps.sandbox_dirs.clone(),
            self.deps.catalog.clone(),
            self.deps.viewer_bridge.clone(),
        )
    }

    pub fn open_document(&self) -> OpenDocumentUseCase {
        OpenDocumentUseCase::new(
            self.deps.sandbox_dirs.clone(),
            self.deps.document_store.clone(),
            self.deps.downloads.clone(),
            self.deps.content_resolver.clone(),
            self.deps.viewer_bridge.clone(),
            self.deps.viewer_state.clone(),
            self.deps.settings.clone(),
            self.deps.notices.clone(),
        )
    }
}

/// Assembles an [`App`] from individually supplied ports. Every port is
/// required; `build` reports the first one missing.
#[derive(Default)]
pub struct AppBuilder {
    sandbox_dirs: Option<Arc<dyn SandboxDirsPort>>,
    asset_materializer: Option<Arc<dyn AssetMaterializerPort>>,
    catalog: Option<Arc<dyn FileCatalogPort>>,
    document_store: Option<Arc<dyn DocumentStorePort>>,
    downloads: Option<Arc<dyn DownloadManagerPort>>,
    content_resolver: Option<Arc<dyn ContentResolverPort>>,
    viewer_bridge: Option<Arc<dyn ViewerBridgePort>>,
    viewer_state: Option<Arc<dyn ViewerStateStorePort>>,
    settings: Option<Arc<dyn SettingsPort>>,
    notices: Option<Arc<dyn NoticePort>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sandbox_dirs(mut self, port: Arc<dyn SandboxDirsPort>) -> Self {
        self.sandbox_dirs = Some(port);
        self
    }

    pub fn with_asset_materializer(mut self, port: Arc<dyn AssetMaterializerPort>) -> Self {
        self.asset_materializer = Some(port);
        self
    }

    pub fn with_catalog(mut self, port: Arc<dyn FileCatalogPort>) -> Self {
        self.catalog = Some(port);
        self
    }

    pub fn with_document_store(mut self, port: Arc<dyn DocumentStorePort>) -> Self {
        self.document_store = Some(port);
        self
    }

    pub fn with_downloads(mut self, port: Arc<dyn DownloadManagerPort>) -> Self {
        self.downloads = Some(port);
        self
    }

    pub fn with_content_resolver(mut self, port: Arc<dyn ContentResolverPort>) -> Self {
        self.content_resolver = Some(port);
        self
    }

    pub fn with_viewer_bridge(mut self, port: Arc<dyn ViewerBridgePort>) -> Self {
        self.viewer_bridge = Some(port);
        self
    }

    pub fn with_viewer_state(mut self, port: Arc<dyn ViewerStateStorePort>) -> Self {
        self.viewer_state = Some(port);
        self
    }

    pub fn with_settings(mut self, port: Arc<dyn SettingsPort>) -> Self {
        self.settings = Some(port);
        self
    }

    pub fn with_notices(mut self, port: Arc<dyn NoticePort>) -> Self {
        self.notices = Some(port);
        self
    }

    pub fn build(self) -> Result<App> {
        fn required<T>(port: Option<T>, name: &str) -> Result<T> {
            port.ok_or_else(|| anyhow::anyhow!("{name} port is required"))
        }

        Ok(App::new(AppDeps {
            sandbox_dirs: required(self.sandbox_dirs, "sandbox_dirs")?,
            asset_materializer: required(self.asset_materializer, "asset_materializer")?,
            catalog: required(self.catalog, "catalog")?,
            document_store: required(self.document_store, "document_store")?,
            downloads: required(self.downloads, "downloads")?,
            content_resolver: required(self.content_resolver, "content_resolver")?,
            viewer_bridge: required(self.viewer_bridge, "viewer_bridge")?,
            viewer_state: required(self.viewer_state, "viewer_state")?,
            settings: required(self.settings, "settings")?,
            notices: required(self.notices, "notices")?,
        }))
    }
}
