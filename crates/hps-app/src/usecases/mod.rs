pub mod list_documents;
pub mod materialize_assets;
pub mod open_document;
pub mod start_app;

pub use list_documents::ListDocumentsUseCase;
pub use materialize_assets::MaterializeAssetsUseCase;
pub use open_document::{OpenDocumentUseCase, OpenOutcome};
pub use start_app::StartAppUseCase;
