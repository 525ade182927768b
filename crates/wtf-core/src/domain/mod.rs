// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for wtf-init.
//!
//! Pure data and rules: the fixed project layout, path and permission
//! value types, and the report produced by a scaffold run. All I/O is
//! handled via ports defined in the application layer.
//!
//! - **No I/O**: No filesystem, terminal, or environment access
//! - **No external crates**: Only std library + thiserror + serde derives
pub mod entities;
pub mod error;
pub mod layout;

mod validation;

pub use entities::{
    common::{Access, Permissions, RelativePath},
    report::{EntryKind, Outcome, ScaffoldEvent, ScaffoldReport, WriteMode},
    template::{ExampleFile, TemplateKind},
};

pub use error::DomainError;
pub use layout::PackageSpec;
pub use validation::DomainValidator;
