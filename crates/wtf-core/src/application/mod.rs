//! Application layer for wtf-init.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, project directory resolution)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the fixed layout
//! itself lives in `crate::domain::layout`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ScaffoldOptions, ScaffoldService, interpret_answer, project_prompt, resolve_project_dir,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Answerer, Filesystem, TemplateCatalog};

pub use error::ApplicationError;
