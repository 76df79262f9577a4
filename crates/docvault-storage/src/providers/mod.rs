//! Byte store provider implementations.

pub mod local;
pub mod memory;

use std::sync::Arc;

use docvault_core::config::storage::StorageConfig;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::store::ByteStore;

pub use local::LocalByteStore;
pub use memory::MemoryByteStore;

/// Build the configured byte store provider.
pub async fn from_config(config: &StorageConfig) -> AppResult<Arc<dyn ByteStore>> {
    match config.provider.as_str() {
        "local" => Ok(Arc::new(LocalByteStore::new(&config.local.root_path).await?)),
        "memory" => Ok(Arc::new(MemoryByteStore::new())),
        other => Err(AppError::configuration(format!(
            "Unknown byte store provider: {other}"
        ))),
    }
}
