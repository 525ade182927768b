//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `wtf-adapters` (and the CLI, for prompts) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateCatalog`: Fixed template contents and example files
//!   - `Answerer`: Yes/no decisions from the user

pub mod output;

pub use output::{Answerer, Filesystem, TemplateCatalog};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateCatalog};
