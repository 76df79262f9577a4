//! Core type definitions used across the DocVault workspace.

pub mod filter;
pub mod id;

pub use filter::VersionFilter;
pub use id::{OwnerId, VersionId};
