//! Byte store trait for pluggable blob persistence backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for durable path → bytes persistence.
///
/// The byte store has no knowledge of versions or owners; it persists a
/// fully buffered payload under a caller-chosen relative path and serves
/// it back later under the same path. Parent "directories" implied by the
/// path are created as needed. I/O failures surface as opaque
/// [`ErrorKind::Storage`](crate::error::ErrorKind::Storage) errors; the
/// caller does not interpret backend-specific error codes.
///
/// The [`ByteStore`] trait is defined here in `docvault-core` and
/// implemented in `docvault-storage`.
#[async_trait]
pub trait ByteStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Persist bytes under the given relative path.
    ///
    /// After a successful return, a [`load`](ByteStore::load) of the same
    /// path yields identical bytes.
    async fn save(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read the bytes stored under the given path.
    async fn load(&self, path: &str) -> AppResult<Bytes>;

    /// Check whether any bytes exist under the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Remove the bytes stored under the given path.
    ///
    /// The version lifecycle never calls this (history retains every
    /// blob), but maintenance tooling in the embedding application does.
    async fn delete(&self, path: &str) -> AppResult<()>;
}
