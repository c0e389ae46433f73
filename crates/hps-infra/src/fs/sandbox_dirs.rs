use std::path::PathBuf;

use hps_core::{
    ports::{SandboxDirsError, SandboxDirsPort},
    sandbox_dirs::SandboxDirs,
};

/// Resolves the sandbox layout from the platform's documents directory,
/// or from an explicit storage-root override (settings, CLI flag,
/// tests).
pub struct DirsSandboxDirs {
    storage_root_override: Option<PathBuf>,
}

impl Default for DirsSandboxDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsSandboxDirs {
    pub fn new() -> Self {
        Self {
            storage_root_override: None,
        }
    }

    pub fn with_storage_root(storage_root: PathBuf) -> Self {
        Self {
            storage_root_override: Some(storage_root),
        }
    }

    fn storage_root(&self) -> Option<PathBuf> {
        if let Some(root) = &self.storage_root_override {
            return Some(root.clone());
        }
        dirs::document_dir().or_else(dirs::home_dir)
    }
}

impl SandboxDirsPort for DirsSandboxDirs {
    fn get_sandbox_dirs(&self) -> Result<SandboxDirs, SandboxDirsError> {
        let root = self
            .storage_root()
            .ok_or(SandboxDirsError::StorageRootUnavailable)?;
        Ok(SandboxDirs::from_storage_root(&root))
    }
}
