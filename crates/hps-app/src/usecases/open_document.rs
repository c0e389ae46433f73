use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hps_core::{
    open::{FileReference, OpenAttempt, ResolveKind, ViewerHandle, UNKNOWN_DISPLAY_NAME},
    ports::{
        ContentResolverPort, DocumentStorePort, DownloadManagerPort, DownloadOutcome, NoticePort,
        SandboxDirsPort, SettingsPort, ViewerBridgePort, ViewerStateStorePort,
    },
    sandbox_dirs::SandboxDirs,
    settings::Settings,
};
use log::{info, warn};
use tracing::{debug_span, Instrument};

pub const LOAD_FAILED_NOTICE: &str = "File failed to load";
pub const BIND_FAILED_NOTICE: &str = "Viewer failed to initialize";

/// Where a single open attempt ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Loaded { path: PathBuf },
    LoadFailed { path: PathBuf },
    /// The bridge was reattached to previously held state; nothing was
    /// reloaded.
    Restored { handle: ViewerHandle },
    BindFailed,
    /// The download completed without a usable file. The attempt stays
    /// waiting; no error is surfaced.
    DownloadStalled,
    DownloadTimedOut,
}

/// Resolves a file reference to a local path and hands it to the viewer
/// bridge.
///
/// Resolution is synchronous for content references and files already on
/// disk, and goes through the download manager otherwise. The blocking
/// bridge load always runs off the calling task. Copy failures along the
/// way are logged and skipped; the only user-visible failures are the
/// transient load/bind notices.
pub struct OpenDocumentUseCase {
    sandbox_dirs: Arc<dyn SandboxDirsPort>,
    document_store: Arc<dyn DocumentStorePort>,
    downloads: Arc<dyn DownloadManagerPort>,
    content_resolver: Arc<dyn ContentResolverPort>,
    viewer_bridge: Arc<dyn ViewerBridgePort>,
    viewer_state: Arc<dyn ViewerStateStorePort>,
    settings: Arc<dyn SettingsPort>,
    notices: Arc<dyn NoticePort>,
}

impl OpenDocumentUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sandbox_dirs: Arc<dyn SandboxDirsPort>,
        document_store: Arc<dyn DocumentStorePort>,
        downloads: Arc<dyn DownloadManagerPort>,
        content_resolver: Arc<dyn ContentResolverPort>,
        viewer_bridge: Arc<dyn ViewerBridgePort>,
        viewer_state: Arc<dyn ViewerStateStorePort>,
        settings: Arc<dyn SettingsPort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            sandbox_dirs,
            document_store,
            downloads,
            content_resolver,
            viewer_bridge,
            viewer_state,
            settings,
            notices,
        }
    }

    pub async fn execute(
        &self,
        reference: &FileReference,
        has_saved_state: bool,
    ) -> Result<OpenOutcome> {
        let span = debug_span!(
            "app.open_document",
            reference = %reference,
            restoring = has_saved_state,
        );
        self.execute_inner(reference, has_saved_state)
            .instrument(span)
            .await
    }

    async fn execute_inner(
        &self,
        reference: &FileReference,
        has_saved_state: bool,
    ) -> Result<OpenOutcome> {
        let dirs = self.sandbox_dirs.get_sandbox_dirs()?;
        let mut attempt = OpenAttempt::new();

        match reference {
            FileReference::Content { uri } => {
                attempt.begin(ResolveKind::Content)?;
                let target = self.materialize_content(uri, &dirs).await;
                if has_saved_state {
                    return self.restore().await;
                }
                attempt.resolved(target.clone())?;
                self.load(&mut attempt, target).await
            }
            FileReference::Direct { uri, path } => {
                if has_saved_state {
                    return self.restore().await;
                }
                attempt.begin(ResolveKind::Direct)?;
                if self.document_store.exists(path).await {
                    let resolved = self.resolve_local(path, &dirs).await;
                    attempt.resolved(resolved.clone())?;
                    self.load(&mut attempt, resolved).await
                } else {
                    self.download_and_open(&mut attempt, uri, &dirs).await
                }
            }
        }
    }

    /// Stream a content reference into the documents root, named after
    /// the provider's display name (or the placeholder when it has
    /// none). Read or write failures are logged; the attempt proceeds
    /// and the subsequent load reports the failure.
    async fn materialize_content(&self, uri: &str, dirs: &SandboxDirs) -> PathBuf {
        let name = match self.content_resolver.display_name(uri).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_DISPLAY_NAME.to_string(),
            Err(err) => {
                warn!("content display-name query for {uri} failed: {err:#}");
                UNKNOWN_DISPLAY_NAME.to_string()
            }
        };
        let target = dirs.documents_root.join(&name);

        match self.content_resolver.read(uri).await {
            Ok(bytes) => {
                match self
                    .document_store
                    .write_bytes(&dirs.documents_root, &name, &bytes)
                    .await
                {
                    Ok(_) => self.added_to_documents(&name),
                    Err(err) => warn!("storing content {name} failed: {err:#}"),
                }
            }
            Err(err) => warn!("reading content {uri} failed: {err:#}"),
        }
        target
    }

    /// A file that exists on disk: use it as-is when it is already part
    /// of the sandbox (by location or by name), otherwise import a copy
    /// into the documents root.
    async fn resolve_local(&self, path: &Path, dirs: &SandboxDirs) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let already_imported = path.starts_with(&dirs.documents_root)
            || path.starts_with(&dirs.samples_dir)
            || self
                .document_store
                .contains_filename(&dirs.documents_root, &name)
                .await;
        if already_imported {
            return path.to_path_buf();
        }

        match self
            .document_store
            .copy_into(path, &dirs.documents_root)
            .await
        {
            Ok(copied) => {
                self.added_to_documents(&name);
                copied
            }
            Err(err) => {
                warn!("importing {} failed: {err:#}", path.display());
                path.to_path_buf()
            }
        }
    }

    /// The reference names no local file: download it into the storage
    /// root, then move the artifact into the documents root and open it.
    async fn download_and_open(
        &self,
        attempt: &mut OpenAttempt,
        uri: &str,
        dirs: &SandboxDirs,
    ) -> Result<OpenOutcome> {
        let settings = self.load_settings().await;
        let ticket = self.downloads.enqueue(uri, &dirs.storage_root).await?;
        attempt.await_download(ticket)?;

        let timeout = Duration::from_secs(settings.download_timeout_secs);
        match self.downloads.wait(ticket, timeout).await? {
            DownloadOutcome::Completed(artifact) => {
                attempt.download_complete(ticket, Some(artifact.clone()));
                let target = self.import_download(&artifact, dirs).await;
                self.load(attempt, target).await
            }
            DownloadOutcome::Missing => {
                attempt.download_complete(ticket, None);
                warn!("download {} finished without a file; attempt stays waiting", ticket.id());
                Ok(OpenOutcome::DownloadStalled)
            }
            DownloadOutcome::TimedOut => {
                self.downloads.cancel(ticket).await;
                warn!("download {} timed out after {timeout:?}", ticket.id());
                Ok(OpenOutcome::DownloadTimedOut)
            }
        }
    }

    async fn import_download(&self, artifact: &Path, dirs: &SandboxDirs) -> PathBuf {
        let name = artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self
            .document_store
            .copy_into(artifact, &dirs.documents_root)
            .await
        {
            Ok(target) => {
                if let Err(err) = self.document_store.remove(artifact).await {
                    warn!(
                        "removing download artifact {} failed: {err:#}",
                        artifact.display()
                    );
                }
                self.added_to_documents(&name);
                target
            }
            Err(err) => {
                warn!("importing download {} failed: {err:#}", artifact.display());
                artifact.to_path_buf()
            }
        }
    }

    async fn restore(&self) -> Result<OpenOutcome> {
        let handle = match self.viewer_state.load().await {
            Ok(Some(handle)) => handle,
            Ok(None) => ViewerHandle::NULL,
            Err(err) => {
                warn!("loading saved viewer state failed: {err:#}");
                ViewerHandle::NULL
            }
        };
        self.viewer_bridge.attach(handle);
        if !self.viewer_bridge.bind() {
            self.notices.notice(BIND_FAILED_NOTICE);
            return Ok(OpenOutcome::BindFailed);
        }
        info!("viewer reattached without reloading");
        Ok(OpenOutcome::Restored { handle })
    }

    async fn load(&self, attempt: &mut OpenAttempt, path: PathBuf) -> Result<OpenOutcome> {
        if !self.viewer_bridge.bind() {
            self.notices.notice(BIND_FAILED_NOTICE);
            return Ok(OpenOutcome::BindFailed);
        }
        attempt.begin_load(path.clone())?;

        let bridge = self.viewer_bridge.clone();
        let load_path = path.clone();
        // Cancelling this task would not interrupt the bridge call; it
        // runs to completion either way.
        let success = tokio::task::spawn_blocking(move || bridge.load(&load_path)).await?;
        attempt.finish_load(success)?;

        if success {
            if let Err(err) = self.viewer_state.save(self.viewer_bridge.handle()).await {
                warn!("saving viewer state failed: {err:#}");
            }
            info!("loaded {}", path.display());
            Ok(OpenOutcome::Loaded { path })
        } else {
            self.notices.notice(LOAD_FAILED_NOTICE);
            Ok(OpenOutcome::LoadFailed { path })
        }
    }

    async fn load_settings(&self) -> Settings {
        match self.settings.load().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!("loading settings failed: {err:#}");
                Settings::default()
            }
        }
    }

    fn added_to_documents(&self, name: &str) {
        self.notices.notice(&format!("{name} Added to My Documents"));
    }
}
