//! Local filesystem byte store.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::traits::store::ByteStore;

/// Byte store persisting blobs under a fixed root directory.
///
/// The root is taken once at construction; nothing here reads environment
/// state at save time. All paths resolve strictly inside the root.
#[derive(Debug, Clone)]
pub struct LocalByteStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalByteStore {
    /// Create a new local byte store rooted at the given path.
    ///
    /// The root directory is created eagerly so that the first save does
    /// not race directory creation with unrelated I/O.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative path to an absolute path within the root.
    ///
    /// Absolute paths and `..` segments are rejected so a malformed key
    /// can never escape the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute() {
            return Err(AppError::storage(format!("Absolute path rejected: {path}")));
        }
        for component in relative.components() {
            if matches!(component, Component::ParentDir) {
                return Err(AppError::storage(format!(
                    "Path escapes storage root: {path}"
                )));
            }
        }
        Ok(self.root.join(relative))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ByteStore for LocalByteStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn save(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote blob");
        Ok(())
    }

    async fn load(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read blob: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path)?;
        Ok(full_path.is_file())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete blob: {path}"),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, LocalByteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalByteStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_load_delete() {
        let (_dir, store) = store().await;

        let data = Bytes::from("curriculum bytes");
        store.save("cv/owner/1_a.pdf", data.clone()).await.unwrap();

        assert!(store.exists("cv/owner/1_a.pdf").await.unwrap());
        assert_eq!(store.load("cv/owner/1_a.pdf").await.unwrap(), data);

        store.delete("cv/owner/1_a.pdf").await.unwrap();
        assert!(!store.exists("cv/owner/1_a.pdf").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let (dir, store) = store().await;

        store
            .save("cv/deep/nested/owner/file.pdf", Bytes::from("x"))
            .await
            .unwrap();

        assert!(dir.path().join("cv/deep/nested/owner/file.pdf").is_file());
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let (_dir, store) = store().await;

        let err = store.load("cv/none/missing.pdf").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rejects_path_escape() {
        let (_dir, store) = store().await;

        assert!(store.save("../outside.bin", Bytes::from("x")).await.is_err());
        assert!(store.save("/etc/outside.bin", Bytes::from("x")).await.is_err());
        assert!(store.load("cv/../../outside.bin").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let (_dir, store) = store().await;
        store.delete("cv/none/missing.pdf").await.unwrap();
    }
}
