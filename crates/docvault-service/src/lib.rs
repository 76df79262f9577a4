//! # docvault-service
//!
//! Version lifecycle service layer for DocVault. The service orchestrates
//! the byte store and version repository to implement the
//! single-current / history-preserving document model.
//!
//! Dependencies arrive by constructor injection as `Arc` references, so
//! callers choose which repository and byte store back the service.

pub mod document;
pub mod locks;

pub use document::{DocumentContent, DocumentUpload, DocumentVersionService};
pub use locks::OwnerLockRegistry;
