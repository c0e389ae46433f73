use anyhow::Result;
use async_trait::async_trait;
use hps_core::{
    document::{DirectoryRoot, DocumentEntry},
    formats::SupportedExtensionSet,
    ports::FileCatalogPort,
    sandbox_dirs::SandboxDirs,
};
use log::warn;
use std::path::Path;
use tokio::fs;

/// Catalog scans over the real filesystem.
///
/// Immediate children only; subdirectories are excluded; enumeration
/// order is whatever the filesystem yields.
pub struct FsFileCatalog;

impl FsFileCatalog {
    pub fn new() -> Self {
        Self
    }

    async fn scan_root(
        &self,
        dir: &Path,
        root: DirectoryRoot,
        formats: &SupportedExtensionSet,
        out: &mut Vec<DocumentEntry>,
    ) -> Result<()> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            // A root that does not exist yet contributes no entries.
            Err(_) => return Ok(()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !formats.matches(&name) {
                continue;
            }
            let meta = match entry.metadata().await {
                Ok(meta) => meta,
                Err(err) => {
                    warn!("skipping {}: {err}", entry.path().display());
                    continue;
                }
            };
            if meta.is_dir() {
                continue;
            }
            out.push(DocumentEntry::new(entry.path(), name, meta.len(), root));
        }
        Ok(())
    }
}

impl Default for FsFileCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileCatalogPort for FsFileCatalog {
    async fn list_openable(
        &self,
        dirs: &SandboxDirs,
        formats: &SupportedExtensionSet,
    ) -> Result<Vec<DocumentEntry>> {
        let mut entries = Vec::new();
        self.scan_root(&dirs.samples_dir, DirectoryRoot::Samples, formats, &mut entries)
            .await?;
        self.scan_root(
            &dirs.documents_root,
            DirectoryRoot::MyDocuments,
            formats,
            &mut entries,
        )
        .await?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn fixture() -> (tempfile::TempDir, SandboxDirs) {
        let storage = tempfile::tempdir().unwrap();
        let dirs = SandboxDirs::from_storage_root(storage.path());
        std::fs::create_dir_all(&dirs.samples_dir).unwrap();

        std::fs::write(dirs.samples_dir.join("a.stl"), b"solid").unwrap();
        std::fs::write(dirs.samples_dir.join("b.txt"), b"notes").unwrap();
        std::fs::write(dirs.samples_dir.join("c.OBJ"), b"v 0 0 0").unwrap();
        std::fs::write(dirs.documents_root.join("d.hsf"), b"hsf").unwrap();
        (storage, dirs)
    }

    fn names(entries: &[DocumentEntry]) -> BTreeSet<String> {
        entries.iter().map(|e| e.display_name.clone()).collect()
    }

    #[tokio::test]
    async fn base_mode_lists_exactly_the_base_format_files() {
        let (_storage, dirs) = fixture();
        let catalog = FsFileCatalog::new();

        let entries = catalog
            .list_openable(&dirs, &SupportedExtensionSet::base_only())
            .await
            .unwrap();

        let expected: BTreeSet<String> = ["a.stl", "c.OBJ", "d.hsf"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names(&entries), expected);
    }

    #[tokio::test]
    async fn entries_are_tagged_with_their_root() {
        let (_storage, dirs) = fixture();
        let catalog = FsFileCatalog::new();

        let entries = catalog
            .list_openable(&dirs, &SupportedExtensionSet::base_only())
            .await
            .unwrap();

        for entry in &entries {
            let expected = if entry.display_name == "d.hsf" {
                DirectoryRoot::MyDocuments
            } else {
                DirectoryRoot::Samples
            };
            assert_eq!(entry.root, expected, "{}", entry.display_name);
        }
    }

    #[tokio::test]
    async fn samples_come_before_documents() {
        let (_storage, dirs) = fixture();
        let catalog = FsFileCatalog::new();

        let entries = catalog
            .list_openable(&dirs, &SupportedExtensionSet::base_only())
            .await
            .unwrap();

        // d.hsf lives in the documents root and must come after every
        // samples entry, whatever order the filesystem enumerated them in.
        let doc_index = entries
            .iter()
            .position(|e| e.display_name == "d.hsf")
            .unwrap();
        assert_eq!(doc_index, entries.len() - 1);
    }

    #[tokio::test]
    async fn subdirectories_are_excluded_even_with_matching_names() {
        let (_storage, dirs) = fixture();
        std::fs::create_dir(dirs.samples_dir.join("folder.stl")).unwrap();
        let catalog = FsFileCatalog::new();

        let entries = catalog
            .list_openable(&dirs, &SupportedExtensionSet::base_only())
            .await
            .unwrap();

        assert!(!names(&entries).contains("folder.stl"));
    }

    #[tokio::test]
    async fn exchange_files_appear_only_with_the_capability() {
        let (_storage, dirs) = fixture();
        std::fs::write(dirs.samples_dir.join("plate.STEP"), b"ISO-10303").unwrap();
        let catalog = FsFileCatalog::new();

        let base = catalog
            .list_openable(&dirs, &SupportedExtensionSet::base_only())
            .await
            .unwrap();
        assert!(!names(&base).contains("plate.STEP"));

        let exchange = catalog
            .list_openable(&dirs, &SupportedExtensionSet::with_exchange())
            .await
            .unwrap();
        assert!(names(&exchange).contains("plate.STEP"));
    }

    #[tokio::test]
    async fn missing_roots_yield_an_empty_catalog() {
        let dirs = SandboxDirs::from_storage_root(&PathBuf::from("/no/such/storage"));
        let catalog = FsFileCatalog::new();

        let entries = catalog
            .list_openable(&dirs, &SupportedExtensionSet::base_only())
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
