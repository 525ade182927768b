//! User template directory with fallback to the built-in templates.
//!
//! Layout of an override directory (every entry optional):
//!
//! ```text
//! <dir>/
//!   root_folder_placeholder
//!   runtests.py
//!   default.yaml
//!   examples/          # copied as-is below the project root
//!     tests/pages/...
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;
use wtf_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    domain::{ExampleFile, TemplateKind},
    error::{ScaffoldError, ScaffoldResult},
};

use super::BuiltinCatalog;

const EXAMPLES_DIR: &str = "examples";

/// Reads templates from a directory; anything missing comes from [`BuiltinCatalog`].
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
    fallback: BuiltinCatalog,
}

impl DirectoryCatalog {
    /// Fails if `root` is not an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> ScaffoldResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(unavailable(&root, "not a directory"));
        }
        Ok(Self {
            root,
            fallback: BuiltinCatalog::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateCatalog for DirectoryCatalog {
    fn content(&self, kind: TemplateKind) -> ScaffoldResult<String> {
        let path = self.root.join(kind.file_name());
        if !path.is_file() {
            debug!(%kind, "No override, using built-in template");
            return self.fallback.content(kind);
        }
        debug!(%kind, path = %path.display(), "Using template override");
        std::fs::read_to_string(&path).map_err(|e| unavailable(&path, &e.to_string()))
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn examples(&self) -> ScaffoldResult<Vec<ExampleFile>> {
        let dir = self.root.join(EXAMPLES_DIR);
        if !dir.is_dir() {
            debug!("No examples override, using built-in examples");
            return self.fallback.examples();
        }

        let mut examples = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| unavailable(&dir, &e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&dir)
                .map_err(|e| ScaffoldError::Internal {
                    message: format!("walkdir yielded a path outside {}: {e}", dir.display()),
                })?;
            let content = std::fs::read_to_string(entry.path())
                .map_err(|e| unavailable(entry.path(), &e.to_string()))?;
            examples.push(ExampleFile::new(relative, content)?);
        }

        debug!(count = examples.len(), "Loaded example overrides");
        Ok(examples)
    }
}

fn unavailable(path: &Path, reason: &str) -> ScaffoldError {
    ApplicationError::TemplateUnavailable {
        name: path.display().to_string(),
        reason: reason.into(),
    }
    .into()
}
