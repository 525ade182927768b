//! Infrastructure adapters for wtf-init.
//!
//! This crate implements the ports defined in `wtf_core::application::ports`.
//! It contains all filesystem I/O and the bundled templates.

pub mod catalog;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::{BuiltinCatalog, DirectoryCatalog};
pub use filesystem::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
