//! Whole-file copy helpers shared by the document store and the asset
//! materializer.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Copy `src` to `dst`, replacing any previous file. Returns the number
/// of bytes copied.
pub async fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    fs::copy(src, dst)
        .await
        .with_context(|| format!("copy {} -> {} failed", src.display(), dst.display()))
}

/// Write `bytes` to `dst`, replacing any previous file.
pub async fn write_file(dst: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(dst, bytes)
        .await
        .with_context(|| format!("write {} failed", dst.display()))
}

/// Case-insensitive check for a file named `file_name` directly in
/// `dir`. A missing or unreadable directory reports false.
pub async fn filename_in_directory(file_name: &str, dir: &Path) -> bool {
    let Ok(mut entries) = fs::read_dir(dir).await else {
        return false;
    };
    let wanted = file_name.to_lowercase();
    while let Ok(Some(entry)) = entries.next_entry().await {
        if entry.file_name().to_string_lossy().to_lowercase() == wanted {
            return true;
        }
    }
    false
}
