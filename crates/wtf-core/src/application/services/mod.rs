//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "pick the project directory".

pub mod project_location;
pub mod scaffold_service;

pub use project_location::{interpret_answer, project_prompt, resolve_project_dir};
pub use scaffold_service::{ScaffoldOptions, ScaffoldService};
