pub mod catalog;
pub mod copy;
pub mod document_store;
pub mod sandbox_dirs;

pub use catalog::FsFileCatalog;
pub use document_store::FsDocumentStore;
pub use sandbox_dirs::DirsSandboxDirs;
