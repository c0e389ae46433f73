use crate::ports::errors::SandboxDirsError;
use crate::sandbox_dirs::SandboxDirs;

pub trait SandboxDirsPort: Send + Sync {
    fn get_sandbox_dirs(&self) -> Result<SandboxDirs, SandboxDirsError>;
}
