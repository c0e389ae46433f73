//! Command-line shell around the sandbox use cases: materialize bundled
//! assets, list openable files, and drive the file-open pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hps_app::usecases::OpenOutcome;
use hps_app::{App, AppBuilder};
use hps_core::open::FileReference;
use hps_core::ports::{NoticePort, SandboxDirsPort, SettingsPort};
use hps_infra::assets::{AssetMaterializer, DirAssetSource};
use hps_infra::content::DirContentProvider;
use hps_infra::download::HttpDownloadManager;
use hps_infra::fs::{DirsSandboxDirs, FsDocumentStore, FsFileCatalog};
use hps_infra::settings::{FileSettingsRepository, FileViewerStateStore};
use hps_infra::viewer::LoggingViewerBridge;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hps-sandbox")]
#[command(about = "File browser and viewer shell for HPS 3D models")]
struct Cli {
    /// Storage root override; defaults to the platform documents directory
    #[arg(long, global = true)]
    storage_root: Option<PathBuf>,

    /// Directory holding the bundled datasets/fonts/materials categories
    #[arg(long, global = true, default_value = "assets")]
    asset_dir: PathBuf,

    /// Provider directory that content: references resolve against
    #[arg(long, global = true, default_value = "content")]
    content_root: PathBuf,

    /// Report the exchange import formats as available
    #[arg(long, global = true)]
    exchange: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy bundled sample assets into the sandbox and print the report
    Init {
        /// Overwrite files that were already materialized
        #[arg(long)]
        overwrite: bool,
    },
    /// List the openable files in the samples and documents roots
    List {
        /// Print the entries as JSON instead of rows
        #[arg(long)]
        json: bool,
    },
    /// Resolve a path, URL, or content reference and load it into the viewer
    Open {
        reference: String,

        /// Reattach previously saved viewer state instead of reloading
        #[arg(long)]
        restore: bool,
    },
}

/// Transient notices go straight to the terminal.
struct ConsoleNotices;

impl NoticePort for ConsoleNotices {
    fn notice(&self, message: &str) {
        println!("{message}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn build_app(cli: &Cli, overwrite: bool) -> Result<App> {
    let mut sandbox_dirs: Arc<dyn SandboxDirsPort> = match &cli.storage_root {
        Some(root) => Arc::new(DirsSandboxDirs::with_storage_root(root.clone())),
        None => Arc::new(DirsSandboxDirs::new()),
    };
    let mut dirs = sandbox_dirs.get_sandbox_dirs()?;

    let settings: Arc<dyn SettingsPort> = Arc::new(FileSettingsRepository::new(
        dirs.documents_root.join("settings.json"),
    ));
    let loaded = settings.load().await?;

    // The CLI flag wins over the settings file, which wins over the
    // platform default.
    if cli.storage_root.is_none() {
        if let Some(root) = &loaded.storage_root {
            sandbox_dirs = Arc::new(DirsSandboxDirs::with_storage_root(root.clone()));
            dirs = sandbox_dirs.get_sandbox_dirs()?;
        }
    }
    let overwrite_assets = overwrite || loaded.overwrite_bundled_assets;

    AppBuilder::new()
        .with_sandbox_dirs(sandbox_dirs)
        .with_asset_materializer(Arc::new(
            AssetMaterializer::new(DirAssetSource::new(cli.asset_dir.clone()))
                .with_overwrite(overwrite_assets),
        ))
        .with_catalog(Arc::new(FsFileCatalog::new()))
        .with_document_store(Arc::new(FsDocumentStore::new()))
        .with_downloads(Arc::new(HttpDownloadManager::new()))
        .with_content_resolver(Arc::new(DirContentProvider::new(cli.content_root.clone())))
        .with_viewer_bridge(Arc::new(
            LoggingViewerBridge::new().with_exchange_import(cli.exchange),
        ))
        .with_viewer_state(Arc::new(FileViewerStateStore::new(
            dirs.documents_root.join("viewer_state.json"),
        )))
        .with_settings(settings)
        .with_notices(Arc::new(ConsoleNotices))
        .build()
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { overwrite } => {
            let app = build_app(&cli, *overwrite).await?;
            let report = app.start_app().execute().await?;
            println!(
                "{} copied, {} skipped, {} failures",
                report.files_copied, report.files_skipped, report.failures
            );
        }
        Commands::List { json } => {
            let app = build_app(&cli, false).await?;
            app.start_app().execute().await?;
            let entries = app.list_documents().execute().await?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    // Showing a thumbnail or the default icon is decided
                    // here, by whether the preview file exists.
                    let preview = entry
                        .preview_image_path
                        .as_ref()
                        .map(|p| p.exists())
                        .unwrap_or(false);
                    println!(
                        "{:<40} {:>10}  {}",
                        entry.display_name,
                        entry.readable_size,
                        if preview { "[preview]" } else { "" }
                    );
                }
            }
        }
        Commands::Open { reference, restore } => {
            let app = build_app(&cli, false).await?;
            app.start_app().execute().await?;
            let reference = FileReference::parse(reference);
            match app.open_document().execute(&reference, *restore).await? {
                OpenOutcome::Loaded { path } => println!("loaded {}", path.display()),
                OpenOutcome::LoadFailed { path } => println!("load of {} failed", path.display()),
                OpenOutcome::Restored { handle } => {
                    println!("reattached to viewer handle {}", handle.as_raw())
                }
                OpenOutcome::BindFailed => println!("viewer failed to initialize"),
                OpenOutcome::DownloadStalled => {
                    println!("download finished without a file; nothing opened")
                }
                OpenOutcome::DownloadTimedOut => println!("download timed out"),
            }
        }
    }

    Ok(())
}
