//! Version vault configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the document version lifecycle service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Path prefix for the document class this vault manages.
    ///
    /// Storage paths take the shape
    /// `<category>/<owner_id>/<timestamp>_<display_name>`; the portal
    /// uses `"cv"` for curricula.
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
        }
    }
}

fn default_category() -> String {
    "cv".to_string()
}
