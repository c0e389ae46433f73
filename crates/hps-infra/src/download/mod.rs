pub mod http;

pub use http::HttpDownloadManager;
