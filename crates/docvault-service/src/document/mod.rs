//! Document version lifecycle.

pub mod naming;
pub mod service;

pub use service::{DocumentContent, DocumentUpload, DocumentVersionService};
