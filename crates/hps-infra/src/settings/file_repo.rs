use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hps_core::{ports::SettingsPort, settings::Settings};
use tokio::fs;

use crate::settings::write_atomic;

/// Settings persisted as one JSON file.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parse settings {} failed", self.path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => {
                Err(err).with_context(|| format!("read settings {} failed", self.path.display()))
            }
        }
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content = serde_json::to_vec_pretty(settings)?;
        write_atomic(&self.path, &content).await
    }
}
