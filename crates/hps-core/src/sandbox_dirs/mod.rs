//! Canonical on-device directory layout.

use std::path::{Path, PathBuf};

/// Directory under the storage root holding everything this app owns.
pub const SANDBOX_DIR_NAME: &str = "HPSSandbox";
/// Bundled sample models, materialized on first run.
pub const SAMPLES_DIR_NAME: &str = "datasets";
pub const FONTS_DIR_NAME: &str = "fonts";
pub const MATERIALS_DIR_NAME: &str = "materials";

/// The fixed directories the shell works with, all derived from the
/// platform storage root. Deriving them is pure; nothing here touches
/// the filesystem or requires the directories to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxDirs {
    /// The platform storage root the sandbox lives under.
    pub storage_root: PathBuf,
    /// Writable user area for imported and downloaded files.
    pub documents_root: PathBuf,
    pub samples_dir: PathBuf,
    pub fonts_dir: PathBuf,
    pub materials_dir: PathBuf,
}

impl SandboxDirs {
    pub fn from_storage_root(storage_root: &Path) -> Self {
        let documents_root = storage_root.join(SANDBOX_DIR_NAME);
        Self {
            storage_root: storage_root.to_path_buf(),
            samples_dir: documents_root.join(SAMPLES_DIR_NAME),
            fonts_dir: documents_root.join(FONTS_DIR_NAME),
            materials_dir: documents_root.join(MATERIALS_DIR_NAME),
            documents_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dirs_derive_from_the_storage_root() {
        let dirs = SandboxDirs::from_storage_root(Path::new("/storage"));
        assert_eq!(dirs.documents_root, PathBuf::from("/storage/HPSSandbox"));
        assert_eq!(
            dirs.samples_dir,
            PathBuf::from("/storage/HPSSandbox/datasets")
        );
        assert_eq!(dirs.fonts_dir, PathBuf::from("/storage/HPSSandbox/fonts"));
        assert_eq!(
            dirs.materials_dir,
            PathBuf::from("/storage/HPSSandbox/materials")
        );
    }

    #[test]
    fn sample_fonts_and_materials_are_siblings_under_the_documents_root() {
        let dirs = SandboxDirs::from_storage_root(Path::new("/x"));
        for dir in [&dirs.samples_dir, &dirs.fonts_dir, &dirs.materials_dir] {
            assert_eq!(dir.parent(), Some(dirs.documents_root.as_path()));
        }
    }
}
