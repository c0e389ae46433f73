pub mod file_repo;
pub mod viewer_state;

pub use file_repo::FileSettingsRepository;
pub use viewer_state::FileViewerStateStore;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Write `content` to `path` through a temp file and rename, so readers
/// see either the previous contents or the fully written new contents.
pub(crate) async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create {} failed", dir.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)
        .await
        .with_context(|| format!("write {} failed", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("rename {} -> {} failed", tmp.display(), path.display()))?;
    Ok(())
}
