pub mod dir_source;
pub mod materializer;

pub use dir_source::DirAssetSource;
pub use materializer::AssetMaterializer;
