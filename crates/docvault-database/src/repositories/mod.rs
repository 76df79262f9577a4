//! Version repository contract and backends.

pub mod memory;
pub mod version;

pub use memory::MemoryVersionRepository;
pub use version::{PgVersionRepository, VersionRepository};
