//! Persisted shell settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Settings persisted as a JSON file in the documents root. Unknown or
/// missing fields fall back to defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the platform storage root when set.
    pub storage_root: Option<PathBuf>,
    /// Re-copy bundled assets over files already materialized.
    pub overwrite_bundled_assets: bool,
    /// How long an open attempt waits on a download before giving up.
    pub download_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_root: None,
            overwrite_bundled_assets: false,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}
