//! Driven (output) ports - implemented by infrastructure.
//!
//! The `wtf-adapters` crate provides the filesystem and catalog
//! implementations; `wtf-cli` provides the terminal [`Answerer`].

use std::path::Path;

use crate::domain::{ExampleFile, Permissions, TemplateKind};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wtf_adapters::filesystem::LocalFilesystem` (production)
/// - `wtf_adapters::filesystem::DryRunFilesystem` (`--dry-run`)
/// - `wtf_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Set file permissions to exactly `permissions`.
    fn set_permissions(&self, path: &Path, permissions: Permissions) -> ScaffoldResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template contents.
///
/// Implemented by:
/// - `wtf_adapters::catalog::BuiltinCatalog` (compiled-in templates)
/// - `wtf_adapters::catalog::DirectoryCatalog` (user override directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateCatalog: Send + Sync {
    /// Content of one of the fixed templates.
    fn content(&self, kind: TemplateKind) -> ScaffoldResult<String>;

    /// Every example file, relative to the project root.
    fn examples(&self) -> ScaffoldResult<Vec<ExampleFile>>;
}

/// Port for yes/no questions to the user.
///
/// Any `Fn(&str) -> bool` is an answerer, which keeps scripted answers in
/// tests to a closure.
pub trait Answerer {
    fn confirm(&self, prompt: &str) -> ScaffoldResult<bool>;
}

impl<F> Answerer for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> ScaffoldResult<bool> {
        Ok(self(prompt))
    }
}
