//! Dry-run filesystem: reads pass through, writes are only recorded.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::RwLock,
};

use tracing::debug;
use wtf_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::ScaffoldResult,
};

/// Wraps another filesystem and never mutates it.
///
/// Planned directories and files are remembered, so later existence checks
/// in the same run see them and a dry run reports exactly what a real run
/// would.
#[derive(Debug)]
pub struct DryRunFilesystem<F> {
    inner: F,
    planned: RwLock<Planned>,
}

#[derive(Debug, Default)]
struct Planned {
    directories: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl<F: Filesystem> DryRunFilesystem<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            planned: RwLock::new(Planned::default()),
        }
    }

    /// Directories that would have been created.
    pub fn planned_directories(&self) -> Vec<PathBuf> {
        self.planned
            .read()
            .map(|p| p.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Files that would have been written.
    pub fn planned_files(&self) -> Vec<PathBuf> {
        self.planned
            .read()
            .map(|p| p.files.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl<F: Filesystem> Filesystem for DryRunFilesystem<F> {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut planned = self
            .planned
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || self.inner.is_dir(ancestor) {
                break;
            }
            planned.directories.insert(ancestor.to_path_buf());
        }
        debug!(path = %path.display(), "Dry run: would create directory");
        Ok(())
    }

    fn write_file(&self, path: &Path, _content: &str) -> ScaffoldResult<()> {
        let mut planned = self
            .planned
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        planned.files.insert(path.to_path_buf());
        debug!(path = %path.display(), "Dry run: would write file");
        Ok(())
    }

    fn set_permissions(&self, path: &Path, permissions: Permissions) -> ScaffoldResult<()> {
        debug!(path = %path.display(), %permissions, "Dry run: would set permissions");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let planned = self
            .planned
            .read()
            .map(|p| p.directories.contains(path) || p.files.contains(path))
            .unwrap_or(false);
        planned || self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let planned = self
            .planned
            .read()
            .map(|p| p.directories.contains(path))
            .unwrap_or(false);
        planned || self.inner.is_dir(path)
    }
}
