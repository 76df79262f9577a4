//! Core traits defined in `docvault-core` and implemented by other crates.

pub mod store;

pub use store::ByteStore;
