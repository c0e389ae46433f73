use std::path::PathBuf;

use thiserror::Error;

use super::DownloadTicket;

/// How the current attempt is resolving its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveKind {
    Content,
    Direct,
}

/// State of a single open attempt.
///
/// `Idle → Resolving → {Ready | AwaitingDownload} → Loading → {Loaded |
/// LoadFailed}`. An attempt waiting on a download leaves that state only
/// when a completion notification arrives with the matching ticket and a
/// present result; anything else leaves it waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenState {
    Idle,
    Resolving(ResolveKind),
    Ready(PathBuf),
    AwaitingDownload(DownloadTicket),
    Loading(PathBuf),
    Loaded,
    LoadFailed,
}

/// What an attempt did with a download-completion notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadAck {
    /// Matching ticket with a present result; the attempt is ready to
    /// load the downloaded artifact.
    Accepted,
    /// The notification was for some other download.
    IgnoredMismatch,
    /// Matching ticket but no resulting file; the attempt keeps waiting.
    IgnoredMissing,
}

#[derive(Debug, Error)]
#[error("{operation} is not valid while the attempt is {state:?}")]
pub struct OpenStateError {
    operation: &'static str,
    state: OpenState,
}

/// Drives one open attempt through its legal transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAttempt {
    state: OpenState,
}

impl Default for OpenAttempt {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAttempt {
    pub fn new() -> Self {
        Self {
            state: OpenState::Idle,
        }
    }

    pub fn state(&self) -> &OpenState {
        &self.state
    }

    pub fn begin(&mut self, kind: ResolveKind) -> Result<(), OpenStateError> {
        match self.state {
            OpenState::Idle => {
                self.state = OpenState::Resolving(kind);
                Ok(())
            }
            _ => Err(self.invalid("begin")),
        }
    }

    pub fn resolved(&mut self, path: PathBuf) -> Result<(), OpenStateError> {
        match self.state {
            OpenState::Resolving(_) => {
                self.state = OpenState::Ready(path);
                Ok(())
            }
            _ => Err(self.invalid("resolved")),
        }
    }

    pub fn await_download(&mut self, ticket: DownloadTicket) -> Result<(), OpenStateError> {
        match self.state {
            OpenState::Resolving(ResolveKind::Direct) => {
                self.state = OpenState::AwaitingDownload(ticket);
                Ok(())
            }
            _ => Err(self.invalid("await_download")),
        }
    }

    /// Feed a download-completion notification into the attempt. Only a
    /// matching ticket carrying a present artifact moves the attempt
    /// forward; every other notification is ignored without error.
    pub fn download_complete(
        &mut self,
        ticket: DownloadTicket,
        artifact: Option<PathBuf>,
    ) -> DownloadAck {
        let waiting = match self.state {
            OpenState::AwaitingDownload(waiting) => waiting,
            _ => return DownloadAck::IgnoredMismatch,
        };
        if waiting != ticket {
            return DownloadAck::IgnoredMismatch;
        }
        match artifact {
            Some(path) => {
                self.state = OpenState::Ready(path);
                DownloadAck::Accepted
            }
            None => DownloadAck::IgnoredMissing,
        }
    }

    pub fn begin_load(&mut self, path: PathBuf) -> Result<(), OpenStateError> {
        match self.state {
            OpenState::Ready(_) => {
                self.state = OpenState::Loading(path);
                Ok(())
            }
            _ => Err(self.invalid("begin_load")),
        }
    }

    pub fn finish_load(&mut self, success: bool) -> Result<(), OpenStateError> {
        match self.state {
            OpenState::Loading(_) => {
                self.state = if success {
                    OpenState::Loaded
                } else {
                    OpenState::LoadFailed
                };
                Ok(())
            }
            _ => Err(self.invalid("finish_load")),
        }
    }

    fn invalid(&self, operation: &'static str) -> OpenStateError {
        OpenStateError {
            operation,
            state: self.state.clone(),
        }
    }
}
