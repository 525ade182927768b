//! wtf-core - scaffolding core for WTF test projects.
//!
//! This crate provides the domain and application layers for `wtf-init`,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            wtf-cli (wtf-init)            │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, resolve_project_dir)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Filesystem, TemplateCatalog, Answerer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      wtf-adapters (Infrastructure)      │
//! │ (LocalFilesystem, BuiltinCatalog, etc)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wtf_core::prelude::*;
//!
//! let service = ScaffoldService::new(filesystem, catalog);
//! let options = ScaffoldOptions::new(VERSION).with_examples(true);
//! let report = service.scaffold_project("./my-project".as_ref(), &options)?;
//! println!("{} paths changed", report.mutation_count());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Answerer, ScaffoldOptions, ScaffoldService, interpret_answer, resolve_project_dir,
        ports::{Filesystem, TemplateCatalog},
    };
    pub use crate::domain::{
        EntryKind, ExampleFile, Outcome, Permissions, RelativePath, ScaffoldEvent,
        ScaffoldReport, TemplateKind, WriteMode,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
