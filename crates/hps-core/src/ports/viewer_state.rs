use anyhow::Result;
use async_trait::async_trait;

use crate::open::ViewerHandle;

/// Persists the single opaque viewer handle across screen recreation so
/// the bridge can reattach instead of reloading its model.
#[async_trait]
pub trait ViewerStateStorePort: Send + Sync {
    async fn save(&self, handle: ViewerHandle) -> Result<()>;

    async fn load(&self) -> Result<Option<ViewerHandle>>;

    async fn clear(&self) -> Result<()>;
}
