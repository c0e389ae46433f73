//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core independent of
//! the filesystem, the network, and the native viewer SDK.

pub mod asset_materializer;
pub mod asset_source;
pub mod catalog;
pub mod content;
pub mod document_store;
pub mod download;
pub mod errors;
pub mod notice;
pub mod sandbox_dirs;
pub mod settings;
pub mod viewer_bridge;
pub mod viewer_state;

pub use asset_materializer::{AssetMaterializerPort, MaterializeReport};
pub use asset_source::AssetSourcePort;
pub use catalog::FileCatalogPort;
pub use content::ContentResolverPort;
pub use document_store::DocumentStorePort;
pub use download::{DownloadManagerPort, DownloadOutcome};
pub use errors::SandboxDirsError;
pub use notice::NoticePort;
pub use sandbox_dirs::SandboxDirsPort;
pub use settings::SettingsPort;
pub use viewer_bridge::{Operator, RenderMode, ViewerBridgePort};
pub use viewer_state::ViewerStateStorePort;
