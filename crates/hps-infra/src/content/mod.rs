pub mod dir_provider;

pub use dir_provider::DirContentProvider;
