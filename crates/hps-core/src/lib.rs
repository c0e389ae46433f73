//! # hps-core
//!
//! Core domain models and port contracts for the HPS sandbox shell.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the document catalog model, the supported-format set,
//! sandbox directory derivation, the open-attempt state machine, and the
//! port traits implemented by the infrastructure layer.

// Public module exports
pub mod document;
pub mod formats;
pub mod open;
pub mod ports;
pub mod sandbox_dirs;
pub mod settings;

// Re-export commonly used types at the crate root
pub use document::{DirectoryRoot, DocumentEntry};
pub use formats::{ImportCapability, SupportedExtensionSet};
pub use open::{DownloadTicket, FileReference, OpenAttempt, OpenState, ViewerHandle};
pub use sandbox_dirs::SandboxDirs;
pub use settings::Settings;
