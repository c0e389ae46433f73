use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::open::DownloadTicket;

/// Result of waiting on one download ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The download finished and its artifact is at this path.
    Completed(PathBuf),
    /// The download finished without producing a usable file, or the
    /// ticket is unknown on this manager.
    Missing,
    /// No completion arrived within the allowed wait.
    TimedOut,
}

/// Asynchronous, ticket-keyed download service.
///
/// `enqueue` returns immediately; completion is observed per ticket via
/// `wait`. Implementations must deliver at most one completion per
/// ticket and must never surface a completion for a ticket other than
/// the one waited on.
#[async_trait]
pub trait DownloadManagerPort: Send + Sync {
    async fn enqueue(&self, uri: &str, destination_dir: &Path) -> Result<DownloadTicket>;

    async fn wait(&self, ticket: DownloadTicket, timeout: Duration) -> Result<DownloadOutcome>;

    /// Drop the subscription for a ticket. The underlying transfer is
    /// not interrupted.
    async fn cancel(&self, ticket: DownloadTicket);
}
