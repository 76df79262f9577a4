//! In-memory byte store.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::store::ByteStore;

/// Byte store keeping all blobs in process memory.
///
/// Used by tests and single-node tooling; contents vanish on drop.
#[derive(Debug, Default)]
pub struct MemoryByteStore {
    blobs: DashMap<String, Bytes>,
}

impl MemoryByteStore {
    /// Create an empty in-memory byte store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blobs currently held.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[async_trait]
impl ByteStore for MemoryByteStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn save(&self, path: &str, data: Bytes) -> AppResult<()> {
        self.blobs.insert(path.to_string(), data);
        Ok(())
    }

    async fn load(&self, path: &str) -> AppResult<Bytes> {
        self.blobs
            .get(path)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Blob not found: {path}")))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.blobs.contains_key(path))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.blobs.remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_overwrites_same_path() {
        let store = MemoryByteStore::new();

        store.save("cv/a", Bytes::from("one")).await.unwrap();
        store.save("cv/a", Bytes::from("two")).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load("cv/a").await.unwrap(), Bytes::from("two"));
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let store = MemoryByteStore::new();
        let err = store.load("cv/missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_exists() {
        let store = MemoryByteStore::new();
        store.save("cv/a", Bytes::from("one")).await.unwrap();

        store.delete("cv/a").await.unwrap();
        assert!(!store.exists("cv/a").await.unwrap());
        assert!(store.is_empty());
    }
}
