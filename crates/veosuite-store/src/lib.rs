//! VeoSuite Store - filesystem persistence adapter
//!
//! Provides:
//! - `FsKvStore`, a StoragePort over one JSON file per collection key
//! - Atomic write primitive (temp→rename) so a crash never leaves a
//!   half-written collection on disk

pub mod atomic;
pub mod errors;
pub mod fs_store;

// Re-export key types
pub use errors::Result;
pub use fs_store::FsKvStore;
