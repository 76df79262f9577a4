//! Document version lifecycle service — upload, delete, promote, list,
//! and download operations over an owner's version history.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::info;

use docvault_core::config::vault::VaultConfig;
use docvault_core::error::AppError;
use docvault_core::traits::ByteStore;
use docvault_core::types::{OwnerId, VersionFilter, VersionId};
use docvault_database::repositories::VersionRepository;
use docvault_entity::document::{CreateDocumentVersion, DocumentVersion};

use crate::locks::OwnerLockRegistry;

use super::naming;

/// An uploaded document payload (single request with full file body).
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Original file name as sent by the caller.
    pub file_name: String,
    /// Caller-declared MIME type, stored verbatim.
    pub mime_type: String,
    /// File content bytes.
    pub bytes: Bytes,
}

/// A version record together with its stored content bytes.
#[derive(Debug, Clone)]
pub struct DocumentContent {
    /// Version metadata.
    pub version: DocumentVersion,
    /// Content bytes read back from the byte store.
    pub data: Bytes,
}

/// Orchestrates the version lifecycle for one class of documents.
///
/// Uploading makes the new version current and demotes the previous one;
/// deletion is logical and keeps history intact; promotion restores an
/// older version to current. Every mutation runs under the owner's lock
/// from [`OwnerLockRegistry`], which is what upholds the single-current
/// invariant across concurrent calls.
#[derive(Debug, Clone)]
pub struct DocumentVersionService {
    /// Version repository.
    repository: Arc<dyn VersionRepository>,
    /// Byte store for document content.
    store: Arc<dyn ByteStore>,
    /// Per-owner mutation locks.
    locks: Arc<OwnerLockRegistry>,
    /// Vault settings (storage path category).
    config: VaultConfig,
}

impl DocumentVersionService {
    /// Creates a new document version service.
    pub fn new(
        repository: Arc<dyn VersionRepository>,
        store: Arc<dyn ByteStore>,
        config: VaultConfig,
    ) -> Self {
        Self {
            repository,
            store,
            locks: Arc::new(OwnerLockRegistry::new()),
            config,
        }
    }

    /// Stores an uploaded document as the owner's new current version.
    ///
    /// The previous current version (if any) is demoted but stays active
    /// and downloadable. Bytes are written to the store before any row
    /// changes, so a storage failure leaves the history untouched.
    pub async fn upload(
        &self,
        owner_id: OwnerId,
        upload: DocumentUpload,
    ) -> Result<DocumentVersion, AppError> {
        if upload.file_name.trim().is_empty() {
            return Err(AppError::validation("Upload is missing a file name"));
        }
        if upload.bytes.is_empty() {
            return Err(AppError::validation("Upload payload is empty"));
        }

        let display_name = naming::sanitize_file_name(&upload.file_name);
        let storage_path = naming::storage_path(
            &self.config.category,
            owner_id,
            Utc::now().timestamp_micros(),
            &display_name,
        );

        // Write content first; the path is unique per upload, so a write
        // that later fails to register leaves no visible record behind.
        self.store.save(&storage_path, upload.bytes.clone()).await?;

        let lock = self.locks.lock_for(owner_id);
        let _guard = lock.lock().await;

        let demoted = self.repository.demote_all_current(owner_id).await?;
        let version = self
            .repository
            .create(&CreateDocumentVersion {
                owner_id,
                display_name,
                storage_path,
                mime_type: upload.mime_type,
            })
            .await?;

        info!(
            owner_id = %owner_id,
            version_id = %version.id,
            display_name = %version.display_name,
            demoted,
            "Document version uploaded"
        );

        Ok(version)
    }

    /// Logically deletes a version, clearing its current flag.
    ///
    /// Returns the deleted record, or `None` when no such version exists
    /// for the owner; a missing id is an expected outcome, not an error.
    /// Stored bytes are kept, so the version history stays reconstructable.
    pub async fn delete(
        &self,
        owner_id: OwnerId,
        version_id: VersionId,
    ) -> Result<Option<DocumentVersion>, AppError> {
        let lock = self.locks.lock_for(owner_id);
        let _guard = lock.lock().await;

        if self
            .repository
            .find_by_id(version_id, owner_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let version = self.repository.soft_delete(version_id, owner_id).await?;

        info!(
            owner_id = %owner_id,
            version_id = %version_id,
            "Document version deleted"
        );

        Ok(Some(version))
    }

    /// Makes an older non-deleted version the owner's current one.
    ///
    /// Whatever was current before is demoted in the same step. Fails
    /// with a not-found error if the id does not name a non-deleted
    /// version of this owner.
    pub async fn promote(
        &self,
        owner_id: OwnerId,
        version_id: VersionId,
    ) -> Result<DocumentVersion, AppError> {
        let lock = self.locks.lock_for(owner_id);
        let _guard = lock.lock().await;

        let version = self.repository.promote(version_id, owner_id).await?;

        info!(
            owner_id = %owner_id,
            version_id = %version_id,
            "Document version promoted to current"
        );

        Ok(version)
    }

    /// Lists the owner's non-deleted versions, newest first.
    pub async fn list_active(&self, owner_id: OwnerId) -> Result<Vec<DocumentVersion>, AppError> {
        self.repository
            .list(owner_id, &VersionFilter::active())
            .await
    }

    /// Lists the owner's full version history, deleted rows included,
    /// newest first.
    pub async fn list_history(&self, owner_id: OwnerId) -> Result<Vec<DocumentVersion>, AppError> {
        self.repository.list(owner_id, &VersionFilter::all()).await
    }

    /// Returns the owner's current version, or `None` when nothing is
    /// current (fresh owner, or the current version was deleted).
    pub async fn get_current(
        &self,
        owner_id: OwnerId,
    ) -> Result<Option<DocumentVersion>, AppError> {
        let current = self
            .repository
            .list(owner_id, &VersionFilter::current())
            .await?;
        Ok(current.into_iter().next())
    }

    /// Fetches a version's metadata and content bytes.
    ///
    /// Deleted versions remain downloadable; their bytes are never purged.
    pub async fn download(
        &self,
        owner_id: OwnerId,
        version_id: VersionId,
    ) -> Result<DocumentContent, AppError> {
        let version = self
            .repository
            .find_by_id(version_id, owner_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Version {version_id} not found for owner {owner_id}"
                ))
            })?;

        let data = self.store.load(&version.storage_path).await?;

        Ok(DocumentContent { version, data })
    }
}
