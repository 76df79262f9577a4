//! # docvault-database
//!
//! PostgreSQL connection management and version repository
//! implementations for DocVault. The [`VersionRepository`] contract is
//! defined here beside its backends so that the lifecycle service can be
//! wired against PostgreSQL in production and against the in-memory
//! implementation in tests.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryVersionRepository, PgVersionRepository, VersionRepository};
