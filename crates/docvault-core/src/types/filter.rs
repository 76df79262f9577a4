//! Explicit list filters for version queries.
//!
//! Logical deletion mixed with default-filtered queries is a classic source
//! of subtle bugs, so every read path states its filtering explicitly: there
//! is no implicit "hide deleted rows" default anywhere in the workspace.

use serde::{Deserialize, Serialize};

/// Filter options for listing the versions of an owner.
///
/// Both flags may combine. The zero value (both `false`) selects the full
/// history, including logically deleted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFilter {
    /// Exclude logically deleted rows.
    #[serde(default)]
    pub only_active: bool,
    /// Restrict to rows flagged current.
    #[serde(default)]
    pub only_current: bool,
}

impl VersionFilter {
    /// Full history: deleted and non-deleted rows alike.
    pub fn all() -> Self {
        Self::default()
    }

    /// Non-deleted rows only.
    pub fn active() -> Self {
        Self {
            only_active: true,
            only_current: false,
        }
    }

    /// The single current, non-deleted row (if any).
    pub fn current() -> Self {
        Self {
            only_active: true,
            only_current: true,
        }
    }

    /// Whether a row with the given flags passes this filter.
    pub fn matches(&self, is_current: bool, is_deleted: bool) -> bool {
        if self.only_active && is_deleted {
            return false;
        }
        if self.only_current && !is_current {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passes_everything() {
        let f = VersionFilter::all();
        assert!(f.matches(true, false));
        assert!(f.matches(false, false));
        assert!(f.matches(false, true));
    }

    #[test]
    fn test_active_excludes_deleted() {
        let f = VersionFilter::active();
        assert!(f.matches(false, false));
        assert!(!f.matches(false, true));
        assert!(!f.matches(true, true));
    }

    #[test]
    fn test_current_combines_both_flags() {
        let f = VersionFilter::current();
        assert!(f.matches(true, false));
        assert!(!f.matches(false, false));
        assert!(!f.matches(true, true));
    }
}
