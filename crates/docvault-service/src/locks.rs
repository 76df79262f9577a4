//! Per-owner write serialization.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use docvault_core::types::OwnerId;

/// Hands out one mutex per owner so that version mutations for the same
/// owner run strictly one at a time.
///
/// Every operation that touches the current flag (upload, delete, promote)
/// acquires the owner's mutex for its full read-modify-write sequence.
/// Mutations for different owners never contend. Entries are created on
/// first use and kept for the registry's lifetime; the owner population is
/// bounded by the collaborator roster, so the map stays small.
#[derive(Debug)]
pub struct OwnerLockRegistry {
    /// Owner ID → serialization mutex
    locks: DashMap<OwnerId, Arc<Mutex<()>>>,
}

impl OwnerLockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Get the mutex for an owner, creating it on first use
    pub fn lock_for(&self, owner_id: OwnerId) -> Arc<Mutex<()>> {
        self.locks
            .entry(owner_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Number of owners with a registered mutex
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether no owner has locked yet
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Default for OwnerLockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
