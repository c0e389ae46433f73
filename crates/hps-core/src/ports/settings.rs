use anyhow::Result;
use async_trait::async_trait;

use crate::settings::Settings;

#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Load persisted settings; a missing file yields the defaults.
    async fn load(&self) -> Result<Settings>;

    async fn save(&self, settings: &Settings) -> Result<()>;
}
