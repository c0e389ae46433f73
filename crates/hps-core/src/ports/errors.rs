use thiserror::Error;

#[derive(Debug, Error)]
pub enum SandboxDirsError {
    #[error("no storage root available on this platform")]
    StorageRootUnavailable,
}
