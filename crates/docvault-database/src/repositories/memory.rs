//! In-memory version repository using a Tokio mutex.
//!
//! Suitable for single-node deployments and tests. Every mutating
//! operation runs under one mutex guard, so the demote-then-set step of
//! [`promote`](super::VersionRepository::promote) is atomic here the same
//! way the PostgreSQL implementation makes it atomic with a transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::types::filter::VersionFilter;
use docvault_core::types::id::{OwnerId, VersionId};
use docvault_entity::document::{CreateDocumentVersion, DocumentVersion};

use super::version::VersionRepository;

/// In-memory version repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryVersionRepository {
    /// All rows ever created, in insertion order. Never shrinks;
    /// deletion is logical, like in the table-backed implementation.
    rows: Arc<Mutex<Vec<DocumentVersion>>>,
}

impl MemoryVersionRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VersionRepository for MemoryVersionRepository {
    async fn create(&self, data: &CreateDocumentVersion) -> AppResult<DocumentVersion> {
        let now = Utc::now();
        let version = DocumentVersion {
            id: VersionId::new(),
            owner_id: data.owner_id,
            display_name: data.display_name.clone(),
            storage_path: data.storage_path.clone(),
            mime_type: data.mime_type.clone(),
            is_current: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let mut rows = self.rows.lock().await;
        rows.push(version.clone());
        debug!(version_id = %version.id, owner_id = %version.owner_id, "Version row created");
        Ok(version)
    }

    async fn demote_all_current(&self, owner_id: OwnerId) -> AppResult<u64> {
        let mut rows = self.rows.lock().await;
        let mut demoted = 0u64;
        for row in rows
            .iter_mut()
            .filter(|r| r.owner_id == owner_id && r.is_current && !r.is_deleted)
        {
            row.is_current = false;
            row.updated_at = Utc::now();
            demoted += 1;
        }
        Ok(demoted)
    }

    async fn promote(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<DocumentVersion> {
        let mut rows = self.rows.lock().await;

        if !rows
            .iter()
            .any(|r| r.id == version_id && r.owner_id == owner_id && !r.is_deleted)
        {
            return Err(AppError::not_found(format!(
                "Version {version_id} not found for owner {owner_id}"
            )));
        }

        let now = Utc::now();
        for row in rows
            .iter_mut()
            .filter(|r| r.owner_id == owner_id && r.is_current && !r.is_deleted)
        {
            row.is_current = false;
            row.updated_at = now;
        }

        let target = rows
            .iter_mut()
            .find(|r| r.id == version_id && r.owner_id == owner_id)
            .ok_or_else(|| AppError::internal("Version row vanished under lock"))?;
        target.is_current = true;
        target.updated_at = now;
        Ok(target.clone())
    }

    async fn soft_delete(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<DocumentVersion> {
        let mut rows = self.rows.lock().await;
        let target = rows
            .iter_mut()
            .find(|r| r.id == version_id && r.owner_id == owner_id)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Version {version_id} not found for owner {owner_id}"
                ))
            })?;

        target.is_deleted = true;
        target.is_current = false;
        target.updated_at = Utc::now();
        Ok(target.clone())
    }

    async fn find_by_id(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<Option<DocumentVersion>> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|r| r.id == version_id && r.owner_id == owner_id)
            .cloned())
    }

    async fn list(
        &self,
        owner_id: OwnerId,
        filter: &VersionFilter,
    ) -> AppResult<Vec<DocumentVersion>> {
        let rows = self.rows.lock().await;
        let mut matched: Vec<DocumentVersion> = rows
            .iter()
            .filter(|r| r.owner_id == owner_id && filter.matches(r.is_current, r.is_deleted))
            .cloned()
            .collect();

        // Stable sort over reversed insertion order: rows created within
        // the same timestamp tick still come back newest-insert first.
        matched.reverse();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}
