use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use hps_core::open::DownloadTicket;
use hps_core::ports::{DownloadManagerPort, DownloadOutcome};
use log::{error, info};
use tokio::fs;
use tokio::sync::oneshot;

/// Ticket-keyed downloads over HTTP.
///
/// Each enqueue spawns one transfer task and registers a one-shot
/// completion slot for its ticket. Waiting on a ticket consumes the
/// slot, so a completion is delivered at most once, and a wait can
/// never observe another ticket's completion. Dropping the slot
/// (timeout, cancel) abandons the subscription without interrupting
/// the transfer.
pub struct HttpDownloadManager {
    client: reqwest::Client,
    next_ticket: AtomicU64,
    pending: Mutex<HashMap<DownloadTicket, oneshot::Receiver<Option<PathBuf>>>>,
}

impl HttpDownloadManager {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            next_ticket: AtomicU64::new(1),
            pending: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for HttpDownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn download_to(client: &reqwest::Client, uri: &str, dest_dir: &Path) -> Result<PathBuf> {
    let response = client.get(uri).send().await?;
    if !response.status().is_success() {
        bail!("download of {uri} failed, status: {}", response.status());
    }

    let name = uri
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("download");
    fs::create_dir_all(dest_dir).await?;
    let target = dest_dir.join(name);

    let bytes = response.bytes().await?;
    fs::write(&target, &bytes).await?;
    info!("downloaded {uri} to {}", target.display());
    Ok(target)
}

#[async_trait]
impl DownloadManagerPort for HttpDownloadManager {
    async fn enqueue(&self, uri: &str, destination_dir: &Path) -> Result<DownloadTicket> {
        let ticket = DownloadTicket::new(self.next_ticket.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = oneshot::channel();

        let client = self.client.clone();
        let uri = uri.to_string();
        let dest_dir = destination_dir.to_path_buf();
        let task_uri = uri.clone();
        tokio::spawn(async move {
            let artifact = match download_to(&client, &task_uri, &dest_dir).await {
                Ok(path) => Some(path),
                Err(err) => {
                    error!("{err:#}");
                    None
                }
            };
            // The receiver may already be gone (timeout or cancel).
            let _ = tx.send(artifact);
        });

        self.pending.lock().unwrap().insert(ticket, rx);
        info!("enqueued download {} for {uri}", ticket.id());
        Ok(ticket)
    }

    async fn wait(&self, ticket: DownloadTicket, timeout: Duration) -> Result<DownloadOutcome> {
        let Some(rx) = self.pending.lock().unwrap().remove(&ticket) else {
            return Ok(DownloadOutcome::Missing);
        };

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(Some(path))) => Ok(DownloadOutcome::Completed(path)),
            Ok(_) => Ok(DownloadOutcome::Missing),
            Err(_) => Ok(DownloadOutcome::TimedOut),
        }
    }

    async fn cancel(&self, ticket: DownloadTicket) {
        self.pending.lock().unwrap().remove(&ticket);
    }
}
