//! Hand-rolled port doubles shared by the integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use hps_app::{App, AppBuilder};
use hps_core::open::{DownloadTicket, ViewerHandle};
use hps_core::ports::{
    ContentResolverPort, DownloadManagerPort, DownloadOutcome, NoticePort, Operator, RenderMode,
    SettingsPort, ViewerBridgePort, ViewerStateStorePort,
};
use hps_core::sandbox_dirs::SandboxDirs;
use hps_core::settings::Settings;
use hps_infra::assets::{AssetMaterializer, DirAssetSource};
use hps_infra::fs::{DirsSandboxDirs, FsDocumentStore, FsFileCatalog};

/// Viewer bridge that records every interaction instead of rendering.
pub struct RecordingBridge {
    bind_result: AtomicBool,
    load_result: AtomicBool,
    exchange_import: bool,
    handle: AtomicI64,
    pub loads: Mutex<Vec<PathBuf>>,
    pub attached: Mutex<Vec<ViewerHandle>>,
    pub font_dirs: Mutex<Vec<PathBuf>>,
    pub material_dirs: Mutex<Vec<PathBuf>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self {
            bind_result: AtomicBool::new(true),
            load_result: AtomicBool::new(true),
            exchange_import: false,
            handle: AtomicI64::new(41),
            loads: Mutex::new(Vec::new()),
            attached: Mutex::new(Vec::new()),
            font_dirs: Mutex::new(Vec::new()),
            material_dirs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_loads(self) -> Self {
        self.load_result.store(false, Ordering::SeqCst);
        self
    }

    pub fn failing_bind(self) -> Self {
        self.bind_result.store(false, Ordering::SeqCst);
        self
    }

    pub fn with_exchange_import(mut self) -> Self {
        self.exchange_import = true;
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().unwrap().len()
    }
}

impl ViewerBridgePort for RecordingBridge {
    fn bind(&self) -> bool {
        self.bind_result.load(Ordering::SeqCst)
    }

    fn load(&self, path: &Path) -> bool {
        self.loads.lock().unwrap().push(path.to_path_buf());
        self.load_result.load(Ordering::SeqCst)
    }

    fn handle(&self) -> ViewerHandle {
        ViewerHandle::from_raw(self.handle.load(Ordering::SeqCst))
    }

    fn attach(&self, handle: ViewerHandle) {
        self.attached.lock().unwrap().push(handle);
        self.handle.store(handle.as_raw(), Ordering::SeqCst);
    }

    fn supports_exchange_import(&self) -> bool {
        self.exchange_import
    }

    fn set_font_directory(&self, path: &Path) {
        self.font_dirs.lock().unwrap().push(path.to_path_buf());
    }

    fn set_materials_directory(&self, path: &Path) {
        self.material_dirs.lock().unwrap().push(path.to_path_buf());
    }

    fn set_operator(&self, _operator: Operator) {}

    fn set_render_mode(&self, _mode: RenderMode) {}

    fn set_simple_shadow(&self, _enabled: bool) {}

    fn toggle_frame_rate(&self) {}

    fn run_user_code(&self, _slot: u8) {}

    fn text_input(&self, _text: &str) {}

    fn clear_touches(&self) {}
}

/// Collects transient notices instead of showing them.
#[derive(Default)]
pub struct NoticeLog {
    pub messages: Mutex<Vec<String>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.contains(needle))
    }
}

impl NoticePort for NoticeLog {
    fn notice(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// In-memory viewer-state store.
#[derive(Default)]
pub struct MemoryViewerState {
    pub handle: Mutex<Option<ViewerHandle>>,
}

impl MemoryViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(handle: ViewerHandle) -> Self {
        Self {
            handle: Mutex::new(Some(handle)),
        }
    }
}

#[async_trait]
impl ViewerStateStorePort for MemoryViewerState {
    async fn save(&self, handle: ViewerHandle) -> Result<()> {
        *self.handle.lock().unwrap() = Some(handle);
        Ok(())
    }

    async fn load(&self) -> Result<Option<ViewerHandle>> {
        Ok(*self.handle.lock().unwrap())
    }

    async fn clear(&self) -> Result<()> {
        *self.handle.lock().unwrap() = None;
        Ok(())
    }
}

/// In-memory settings store.
pub struct MemorySettings {
    pub settings: Mutex<Settings>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(Settings::default()),
        }
    }
}

#[async_trait]
impl SettingsPort for MemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

/// Content resolution with a scripted display name and payload.
pub struct ScriptedContent {
    pub display_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl ScriptedContent {
    pub fn named(name: &str, bytes: &[u8]) -> Self {
        Self {
            display_name: Some(name.to_string()),
            bytes: bytes.to_vec(),
        }
    }

    pub fn nameless(bytes: &[u8]) -> Self {
        Self {
            display_name: None,
            bytes: bytes.to_vec(),
        }
    }
}

#[async_trait]
impl ContentResolverPort for ScriptedContent {
    async fn display_name(&self, _uri: &str) -> Result<Option<String>> {
        Ok(self.display_name.clone())
    }

    async fn read(&self, _uri: &str) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// What a scripted download manager should do with its one ticket.
pub enum DownloadScript {
    /// Enqueue drops the named artifact into the destination directory
    /// and wait reports it completed.
    Complete { file_name: String, bytes: Vec<u8> },
    Missing,
    TimedOut,
}

/// Download manager double driven by a [`DownloadScript`].
pub struct ScriptedDownloads {
    script: DownloadScript,
    artifact: Mutex<Option<PathBuf>>,
    pub enqueued: Mutex<Vec<String>>,
    pub cancelled: Mutex<Vec<DownloadTicket>>,
}

impl ScriptedDownloads {
    pub fn new(script: DownloadScript) -> Self {
        Self {
            script,
            artifact: Mutex::new(None),
            enqueued: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DownloadManagerPort for ScriptedDownloads {
    async fn enqueue(&self, uri: &str, destination_dir: &Path) -> Result<DownloadTicket> {
        self.enqueued.lock().unwrap().push(uri.to_string());
        if let DownloadScript::Complete { file_name, bytes } = &self.script {
            std::fs::create_dir_all(destination_dir)?;
            let path = destination_dir.join(file_name);
            std::fs::write(&path, bytes)?;
            *self.artifact.lock().unwrap() = Some(path);
        }
        Ok(DownloadTicket::new(1))
    }

    async fn wait(&self, _ticket: DownloadTicket, _timeout: Duration) -> Result<DownloadOutcome> {
        match &self.script {
            DownloadScript::Complete { .. } => {
                let path = self.artifact.lock().unwrap().clone().expect("enqueue ran");
                Ok(DownloadOutcome::Completed(path))
            }
            DownloadScript::Missing => Ok(DownloadOutcome::Missing),
            DownloadScript::TimedOut => Ok(DownloadOutcome::TimedOut),
        }
    }

    async fn cancel(&self, ticket: DownloadTicket) {
        self.cancelled.lock().unwrap().push(ticket);
    }
}

/// A fully wired [`App`] over a temp storage root, with recording
/// doubles where the tests need to observe behavior.
pub struct Harness {
    pub storage: tempfile::TempDir,
    pub assets: tempfile::TempDir,
    pub dirs: SandboxDirs,
    pub app: App,
    pub bridge: Arc<RecordingBridge>,
    pub notices: Arc<NoticeLog>,
    pub downloads: Arc<ScriptedDownloads>,
    pub viewer_state: Arc<MemoryViewerState>,
}

pub struct HarnessConfig {
    pub bridge: RecordingBridge,
    pub download_script: DownloadScript,
    pub content: ScriptedContent,
    pub viewer_state: MemoryViewerState,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            bridge: RecordingBridge::new(),
            download_script: DownloadScript::Missing,
            content: ScriptedContent::named("part.hsf", b"hsf"),
            viewer_state: MemoryViewerState::new(),
        }
    }
}

pub fn harness(config: HarnessConfig) -> Harness {
    let storage = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    let dirs = SandboxDirs::from_storage_root(storage.path());
    std::fs::create_dir_all(&dirs.samples_dir).unwrap();

    let bridge = Arc::new(config.bridge);
    let notices = Arc::new(NoticeLog::new());
    let downloads = Arc::new(ScriptedDownloads::new(config.download_script));
    let viewer_state = Arc::new(config.viewer_state);

    let app = AppBuilder::new()
        .with_sandbox_dirs(Arc::new(DirsSandboxDirs::with_storage_root(
            storage.path().to_path_buf(),
        )))
        .with_asset_materializer(Arc::new(AssetMaterializer::new(DirAssetSource::new(
            assets.path().to_path_buf(),
        ))))
        .with_catalog(Arc::new(FsFileCatalog::new()))
        .with_document_store(Arc::new(FsDocumentStore::new()))
        .with_downloads(downloads.clone())
        .with_content_resolver(Arc::new(config.content))
        .with_viewer_bridge(bridge.clone())
        .with_viewer_state(viewer_state.clone())
        .with_settings(Arc::new(MemorySettings::new()))
        .with_notices(notices.clone())
        .build()
        .unwrap();

    Harness {
        storage,
        assets,
        dirs,
        app,
        bridge,
        notices,
        downloads,
        viewer_state,
    }
}

/// Files directly under `dir`, by name.
pub fn dir_file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
