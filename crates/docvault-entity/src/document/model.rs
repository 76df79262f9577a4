//! Document version entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docvault_core::types::id::{OwnerId, VersionId};

/// One uploaded document instance belonging to an owner.
///
/// Rows are never physically removed: deletion is always logical, so the
/// full upload history of an owner stays queryable. Per owner, at most one
/// non-deleted row carries `is_current = true`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentVersion {
    /// Unique version identifier, assigned at creation, immutable.
    pub id: VersionId,
    /// The entity this document belongs to. Immutable.
    pub owner_id: OwnerId,
    /// Sanitized file name. Immutable once stored.
    pub display_name: String,
    /// Byte-store key under which the content lives.
    pub storage_path: String,
    /// Caller-declared content type, stored verbatim, never validated
    /// against the actual bytes.
    pub mime_type: String,
    /// Whether this row is the owner's active document.
    pub is_current: bool,
    /// Logical delete flag. Once true, never reverts.
    pub is_deleted: bool,
    /// When this version was created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation (current-flag toggle, deletion).
    pub updated_at: DateTime<Utc>,
}

impl DocumentVersion {
    /// Whether this version is still visible outside history queries.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.display_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.display_name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new document version record.
///
/// The repository assigns `id`, the lifecycle flags, and the timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentVersion {
    /// The owning entity.
    pub owner_id: OwnerId,
    /// Sanitized file name.
    pub display_name: String,
    /// Byte-store key chosen by the lifecycle service.
    pub storage_path: String,
    /// Caller-declared content type.
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> DocumentVersion {
        DocumentVersion {
            id: VersionId::new(),
            owner_id: OwnerId::new(),
            display_name: name.to_string(),
            storage_path: format!("cv/test/{name}"),
            mime_type: "application/pdf".to_string(),
            is_current: true,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(sample("resume.PDF").extension(), Some("pdf".into()));
        assert_eq!(sample("archive.tar.gz").extension(), Some("gz".into()));
        assert_eq!(sample("noext").extension(), None);
    }

    #[test]
    fn test_is_active_tracks_deletion_flag() {
        let mut version = sample("resume.pdf");
        assert!(version.is_active());
        version.is_deleted = true;
        assert!(!version.is_active());
    }

    #[test]
    fn test_serde_roundtrip() {
        let version = sample("resume.pdf");
        let json = serde_json::to_string(&version).expect("serialize");
        let parsed: DocumentVersion = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.id, version.id);
        assert_eq!(parsed.display_name, version.display_name);
    }
}
