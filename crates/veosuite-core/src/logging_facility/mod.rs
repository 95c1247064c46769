//! Logging facility
//!
//! Thin wrapper around tracing-subscriber with profile-based setup.

pub mod init;

pub use init::{init, Profile};
