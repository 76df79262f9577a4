//! Document version entity.

pub mod model;

pub use model::{CreateDocumentVersion, DocumentVersion};
