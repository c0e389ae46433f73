use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hps_core::open::{ViewerHandle, VIEWER_HANDLE_KEY};
use hps_core::ports::ViewerStateStorePort;
use tokio::fs;

use crate::settings::write_atomic;

/// Persists the opaque viewer handle as a one-key JSON file so a
/// recreated screen can reattach instead of reloading.
pub struct FileViewerStateStore {
    path: PathBuf,
}

impl FileViewerStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ViewerStateStorePort for FileViewerStateStore {
    async fn save(&self, handle: ViewerHandle) -> Result<()> {
        let content = serde_json::to_vec(&serde_json::json!({
            (VIEWER_HANDLE_KEY): handle.as_raw(),
        }))?;
        write_atomic(&self.path, &content).await
    }

    async fn load(&self) -> Result<Option<ViewerHandle>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read {} failed", self.path.display()))
            }
        };
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {} failed", self.path.display()))?;
        Ok(value
            .get(VIEWER_HANDLE_KEY)
            .and_then(serde_json::Value::as_i64)
            .map(ViewerHandle::from_raw))
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove {} failed", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handle_round_trips_under_the_fixed_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewerStateStore::new(dir.path().join("viewer_state.json"));

        store.save(ViewerHandle::from_raw(7341)).await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            Some(ViewerHandle::from_raw(7341))
        );

        let raw = std::fs::read_to_string(dir.path().join("viewer_state.json")).unwrap();
        assert!(raw.contains("mobileSurfaceId"));
    }

    #[tokio::test]
    async fn no_file_means_no_saved_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewerStateStore::new(dir.path().join("viewer_state.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_forgets_the_handle_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewerStateStore::new(dir.path().join("viewer_state.json"));

        store.save(ViewerHandle::from_raw(1)).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
