//! Version repository contract and PostgreSQL implementation.
//!
//! The repository enforces the persistence half of the single-current
//! invariant: per owner, at most one non-deleted row with
//! `is_current = true`. [`create`](VersionRepository::create) deliberately
//! does **not** demote other rows — sequencing demotion and creation is
//! the lifecycle service's job, under its per-owner lock. Rows are never
//! physically removed; deletion is logical and preserves history.

use async_trait::async_trait;
use sqlx::PgPool;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::types::filter::VersionFilter;
use docvault_core::types::id::{OwnerId, VersionId};
use docvault_entity::document::{CreateDocumentVersion, DocumentVersion};

/// Contract for invariant-preserving operations over version rows keyed
/// by `(owner_id, version_id)`.
///
/// Two implementations are provided: PostgreSQL-backed
/// ([`PgVersionRepository`]) and in-memory
/// ([`MemoryVersionRepository`](crate::repositories::MemoryVersionRepository))
/// for single-node and test use.
#[async_trait]
pub trait VersionRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new record with `is_current = true`, `is_deleted = false`,
    /// and timestamps set to now. Does not demote other records.
    async fn create(&self, data: &CreateDocumentVersion) -> AppResult<DocumentVersion>;

    /// Clear `is_current` and refresh `updated_at` on every non-deleted
    /// record of the owner currently flagged current. Idempotent; calling
    /// it with nothing current is a no-op. Returns the number of rows
    /// demoted (a log detail, not a contract).
    async fn demote_all_current(&self, owner_id: OwnerId) -> AppResult<u64>;

    /// Make the given non-deleted record the owner's current version,
    /// demoting whatever was current before, as one atomic unit.
    ///
    /// Fails with a not-found error if the id does not belong to a
    /// non-deleted record of that owner; no state changes in that case.
    async fn promote(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<DocumentVersion>;

    /// Set `is_deleted = true` and `is_current = false` on the record,
    /// whatever its prior state. Idempotent on already-deleted rows.
    ///
    /// Fails with a not-found error if the id does not belong to the owner.
    async fn soft_delete(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<DocumentVersion>;

    /// Scoped lookup by `(version_id, owner_id)`, ignoring deletion state.
    async fn find_by_id(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<Option<DocumentVersion>>;

    /// List the owner's versions, newest first by `created_at`, with
    /// explicit filtering.
    async fn list(
        &self,
        owner_id: OwnerId,
        filter: &VersionFilter,
    ) -> AppResult<Vec<DocumentVersion>>;
}

/// PostgreSQL-backed version repository over the `document_versions` table.
#[derive(Debug, Clone)]
pub struct PgVersionRepository {
    pool: PgPool,
}

/// Select the list query matching a filter.
///
/// Kept as a free function so the query selection stays unit-testable
/// without a live database.
fn list_query(filter: &VersionFilter) -> &'static str {
    match (filter.only_active, filter.only_current) {
        (false, false) => {
            "SELECT * FROM document_versions WHERE owner_id = $1 ORDER BY created_at DESC"
        }
        (true, false) => {
            "SELECT * FROM document_versions WHERE owner_id = $1 AND is_deleted = FALSE \
             ORDER BY created_at DESC"
        }
        (false, true) => {
            "SELECT * FROM document_versions WHERE owner_id = $1 AND is_current = TRUE \
             ORDER BY created_at DESC"
        }
        (true, true) => {
            "SELECT * FROM document_versions WHERE owner_id = $1 AND is_current = TRUE \
             AND is_deleted = FALSE ORDER BY created_at DESC"
        }
    }
}

impl PgVersionRepository {
    /// Create a new PostgreSQL version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VersionRepository for PgVersionRepository {
    async fn create(&self, data: &CreateDocumentVersion) -> AppResult<DocumentVersion> {
        sqlx::query_as::<_, DocumentVersion>(
            "INSERT INTO document_versions (owner_id, display_name, storage_path, mime_type, is_current) \
             VALUES ($1, $2, $3, $4, TRUE) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.display_name)
        .bind(&data.storage_path)
        .bind(&data.mime_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create document version", e)
        })
    }

    async fn demote_all_current(&self, owner_id: OwnerId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE document_versions SET is_current = FALSE, updated_at = NOW() \
             WHERE owner_id = $1 AND is_current = TRUE AND is_deleted = FALSE",
        )
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to demote current versions", e)
        })?;
        Ok(result.rows_affected())
    }

    async fn promote(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<DocumentVersion> {
        // Demote and promote inside one transaction so a missing target
        // rolls the demotion back.
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "UPDATE document_versions SET is_current = FALSE, updated_at = NOW() \
             WHERE owner_id = $1 AND is_current = TRUE AND is_deleted = FALSE",
        )
        .bind(owner_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to demote current versions", e)
        })?;

        let promoted = sqlx::query_as::<_, DocumentVersion>(
            "UPDATE document_versions SET is_current = TRUE, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND is_deleted = FALSE RETURNING *",
        )
        .bind(version_id)
        .bind(owner_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to promote version", e)
        })?
        .ok_or_else(|| {
            AppError::not_found(format!("Version {version_id} not found for owner {owner_id}"))
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit promotion", e)
        })?;

        Ok(promoted)
    }

    async fn soft_delete(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<DocumentVersion> {
        sqlx::query_as::<_, DocumentVersion>(
            "UPDATE document_versions SET is_deleted = TRUE, is_current = FALSE, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(version_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to soft-delete version", e)
        })?
        .ok_or_else(|| {
            AppError::not_found(format!("Version {version_id} not found for owner {owner_id}"))
        })
    }

    async fn find_by_id(
        &self,
        version_id: VersionId,
        owner_id: OwnerId,
    ) -> AppResult<Option<DocumentVersion>> {
        sqlx::query_as::<_, DocumentVersion>(
            "SELECT * FROM document_versions WHERE id = $1 AND owner_id = $2",
        )
        .bind(version_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find version", e))
    }

    async fn list(
        &self,
        owner_id: OwnerId,
        filter: &VersionFilter,
    ) -> AppResult<Vec<DocumentVersion>> {
        sqlx::query_as::<_, DocumentVersion>(list_query(filter))
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_full_history_has_no_flag_clauses() {
        let q = list_query(&VersionFilter::all());
        assert!(!q.contains("is_deleted"));
        assert!(!q.contains("is_current"));
        assert!(q.contains("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_list_query_active_excludes_deleted() {
        let q = list_query(&VersionFilter::active());
        assert!(q.contains("is_deleted = FALSE"));
        assert!(!q.contains("is_current = TRUE"));
    }

    #[test]
    fn test_list_query_current_combines_both_clauses() {
        let q = list_query(&VersionFilter::current());
        assert!(q.contains("is_current = TRUE"));
        assert!(q.contains("is_deleted = FALSE"));
    }

    #[test]
    fn test_list_query_current_only_keeps_deleted() {
        let filter = VersionFilter {
            only_active: false,
            only_current: true,
        };
        let q = list_query(&filter);
        assert!(q.contains("is_current = TRUE"));
        assert!(!q.contains("is_deleted"));
    }
}
