//! # docvault-storage
//!
//! Byte store providers for DocVault. Implementations of the
//! [`ByteStore`](docvault_core::traits::store::ByteStore) trait from
//! `docvault-core`: a local filesystem provider for production and an
//! in-memory provider for tests and single-node tooling.

pub mod providers;

pub use providers::{LocalByteStore, MemoryByteStore, from_config};
