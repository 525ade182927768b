//! Scaffold Service - main application orchestrator.
//!
//! Creates the fixed WTF project layout below a project directory:
//! 1. Project root, root marker and executable test runner
//! 2. Top-level directories and the default config
//! 3. The `tests/` package tree with its package markers
//! 4. The dependency manifest
//! 5. Example files, when requested
//!
//! Every step is idempotent. Existing template files are skipped unless the
//! caller asks for overwrites; example files are always overwritten.
//! Failures are fatal: nothing is retried or rolled back.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateCatalog},
    },
    domain::{
        DomainValidator, EntryKind, ExampleFile, Outcome, ScaffoldEvent, ScaffoldReport,
        TemplateKind, WriteMode, layout,
    },
    error::ScaffoldResult,
};

/// Options for a single scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Write the example files (always overwriting).
    pub include_examples: bool,
    /// Overwrite template files that already exist.
    pub overwrite_templates: bool,
    /// Version pinned in `requirements.txt`.
    pub tool_version: String,
}

impl ScaffoldOptions {
    pub fn new(tool_version: impl Into<String>) -> Self {
        Self {
            include_examples: false,
            overwrite_templates: false,
            tool_version: tool_version.into(),
        }
    }

    pub fn with_examples(mut self, include: bool) -> Self {
        self.include_examples = include;
        self
    }

    pub fn overwrite_templates(mut self, overwrite: bool) -> Self {
        self.overwrite_templates = overwrite;
        self
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    catalog: Box<dyn TemplateCatalog>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use wtf_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     catalog,    // impl TemplateCatalog
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, catalog: Box<dyn TemplateCatalog>) -> Self {
        Self {
            filesystem,
            catalog,
        }
    }

    /// Scaffold a WTF project in `project_dir`.
    ///
    /// All templates are fetched before the first write, so a broken
    /// catalog fails the run without touching the disk.
    #[instrument(
        skip_all,
        fields(
            project = %project_dir.display(),
            examples = options.include_examples,
            force = options.overwrite_templates
        )
    )]
    pub fn scaffold_project(
        &self,
        project_dir: &Path,
        options: &ScaffoldOptions,
    ) -> ScaffoldResult<ScaffoldReport> {
        DomainValidator::validate_tool_version(&options.tool_version)?;

        let root_marker = self.catalog.content(TemplateKind::RootMarker)?;
        let runner = self.catalog.content(TemplateKind::TestRunner)?;
        let default_config = self.catalog.content(TemplateKind::DefaultConfig)?;
        let examples = if options.include_examples {
            self.catalog.examples()?
        } else {
            Vec::new()
        };

        info!("Scaffolding WTF project");

        let templates = WriteMode::overwrite_if(options.overwrite_templates);
        let mut report = ScaffoldReport::new(project_dir);

        // 1. Project root
        report.push(self.ensure_directory(project_dir)?);

        // 2. Root marker
        report.push(self.write_file(
            &project_dir.join(layout::ROOT_MARKER_FILE),
            &root_marker,
            templates,
        )?);

        // 3. Test runner; permissions are reset even if the file was kept
        let runner_path = project_dir.join(layout::TEST_RUNNER_FILE);
        report.push(self.write_file(&runner_path, &runner, templates)?);
        report.push(self.make_executable(&runner_path)?);

        // 4. Top-level directories
        for name in layout::PROJECT_SUBDIRECTORIES {
            report.push(self.ensure_directory(&project_dir.join(name))?);
        }

        // 5. Default config
        report.push(self.write_file(
            &project_dir
                .join(layout::CONFIGS_DIR)
                .join(layout::DEFAULT_CONFIG_FILE),
            &default_config,
            templates,
        )?);

        // 6. tests/ package tree
        report.extend(self.scaffold_test_tree(&project_dir.join(layout::TESTS_DIR), templates)?);

        // 7. Dependency manifest
        report.push(self.write_file(
            &project_dir.join(layout::REQUIREMENTS_FILE),
            &layout::requirements_manifest(&options.tool_version),
            templates,
        )?);

        // 8. Examples
        if options.include_examples {
            info!(count = examples.len(), "Generating example files");
            report.extend(self.write_examples(project_dir, &examples)?);
        }

        info!(
            steps = report.events.len(),
            mutations = report.mutation_count(),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Create `tests_root` and its package subdirectories, each with a
    /// package marker holding the directory's description.
    #[instrument(skip_all, fields(tests_root = %tests_root.display()))]
    pub fn scaffold_test_tree(
        &self,
        tests_root: &Path,
        mode: WriteMode,
    ) -> ScaffoldResult<ScaffoldReport> {
        let mut report = ScaffoldReport::new(tests_root);

        report.push(self.ensure_directory(tests_root)?);
        report.push(self.write_file(
            &tests_root.join(layout::PACKAGE_MARKER_FILE),
            layout::TESTS_ROOT_DESCRIPTION,
            mode,
        )?);

        for package in &layout::TEST_PACKAGES {
            let dir = tests_root.join(package.name);
            report.push(self.ensure_directory(&dir)?);
            report.push(self.write_file(
                &dir.join(layout::PACKAGE_MARKER_FILE),
                package.description,
                mode,
            )?);
        }

        Ok(report)
    }

    /// Create `path` (and missing parents) unless it is already a directory.
    ///
    /// A non-directory at `path` is a [`ApplicationError::PathConflict`].
    pub fn ensure_directory(&self, path: &Path) -> ScaffoldResult<ScaffoldEvent> {
        if self.filesystem.exists(path) {
            if !self.filesystem.is_dir(path) {
                return Err(ApplicationError::PathConflict {
                    path: path.to_path_buf(),
                    expected: EntryKind::Directory,
                }
                .into());
            }
            debug!(path = %path.display(), "Directory already exists");
            return Ok(ScaffoldEvent::directory(path, Outcome::Exists));
        }

        self.filesystem.create_dir_all(path)?;
        debug!(path = %path.display(), "Directory created");
        Ok(ScaffoldEvent::directory(path, Outcome::Created))
    }

    /// Write `content` to `path` according to `mode`.
    ///
    /// A directory at `path` is a [`ApplicationError::PathConflict`].
    pub fn write_file(
        &self,
        path: &Path,
        content: &str,
        mode: WriteMode,
    ) -> ScaffoldResult<ScaffoldEvent> {
        let outcome = if self.filesystem.exists(path) {
            if self.filesystem.is_dir(path) {
                return Err(ApplicationError::PathConflict {
                    path: path.to_path_buf(),
                    expected: EntryKind::File,
                }
                .into());
            }
            match mode {
                WriteMode::SkipExisting => {
                    debug!(path = %path.display(), "File already exists");
                    return Ok(ScaffoldEvent::file(path, Outcome::Exists));
                }
                WriteMode::Overwrite => Outcome::Overwritten,
            }
        } else {
            Outcome::Created
        };

        self.filesystem.write_file(path, content)?;
        debug!(path = %path.display(), %outcome, bytes = content.len(), "File written");
        Ok(ScaffoldEvent::file(path, outcome))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn make_executable(&self, path: &Path) -> ScaffoldResult<ScaffoldEvent> {
        let permissions = layout::test_runner_permissions();
        self.filesystem.set_permissions(path, permissions)?;
        debug!(path = %path.display(), %permissions, "Permissions set");
        Ok(ScaffoldEvent::file(path, Outcome::PermissionsSet))
    }

    fn write_examples(
        &self,
        project_dir: &Path,
        examples: &[ExampleFile],
    ) -> ScaffoldResult<ScaffoldReport> {
        let mut report = ScaffoldReport::new(project_dir);

        for example in examples {
            let path = example.path.under(project_dir);
            if let Some(parent) = path.parent() {
                if !self.filesystem.is_dir(parent) {
                    report.push(self.ensure_directory(parent)?);
                }
            }
            report.push(self.write_file(&path, &example.content, WriteMode::Overwrite)?);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateCatalog};
    use crate::domain::DomainError;
    use crate::error::ScaffoldError;

    fn catalog() -> MockTemplateCatalog {
        let mut catalog = MockTemplateCatalog::new();
        catalog
            .expect_content()
            .returning(|kind| Ok(format!("{kind} template")));
        catalog.expect_examples().returning(|| {
            Ok(vec![
                ExampleFile::new("tests/tests/test_example.py", "example test").unwrap(),
            ])
        });
        catalog
    }

    /// Every layout path is a directory except the known files.
    fn looks_like_dir(path: &Path) -> bool {
        path.extension().is_none() && !path.ends_with(layout::ROOT_MARKER_FILE)
    }

    /// A filesystem where every layout entry is already present.
    fn populated_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|p| looks_like_dir(p));
        fs
    }

    /// A filesystem that starts empty and records every write.
    fn empty_fs(writes: Arc<Mutex<Vec<(PathBuf, String)>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_is_dir().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs.expect_write_file().returning(move |path, content| {
            writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        });
        fs
    }

    // ── ensure_directory ──────────────────────────────────────────────────────

    #[test]
    fn ensure_directory_creates_missing_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|path| path.ends_with("proj/assets"))
            .times(1)
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let event = service
            .ensure_directory(Path::new("proj/assets"))
            .unwrap();
        assert_eq!(event.outcome, Outcome::Created);
        assert_eq!(event.kind, EntryKind::Directory);
    }

    #[test]
    fn ensure_directory_leaves_existing_directory_alone() {
        let mut fs = populated_fs();
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let event = service.ensure_directory(Path::new("proj/data")).unwrap();
        assert_eq!(event.outcome, Outcome::Exists);
    }

    #[test]
    fn ensure_directory_over_a_file_is_a_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let err = service
            .ensure_directory(Path::new("proj/tests"))
            .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::Application(ApplicationError::PathConflict {
                path: PathBuf::from("proj/tests"),
                expected: EntryKind::Directory,
            })
        );
    }

    // ── write_file ────────────────────────────────────────────────────────────

    #[test]
    fn write_file_skips_existing_by_default() {
        let mut fs = populated_fs();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let event = service
            .write_file(Path::new("proj/runtests.py"), "new", WriteMode::SkipExisting)
            .unwrap();
        assert_eq!(event.outcome, Outcome::Exists);
    }

    #[test]
    fn write_file_overwrites_when_asked() {
        let mut fs = populated_fs();
        fs.expect_write_file()
            .withf(|path, content| path.ends_with("runtests.py") && content == "new")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let event = service
            .write_file(Path::new("proj/runtests.py"), "new", WriteMode::Overwrite)
            .unwrap();
        assert_eq!(event.outcome, Outcome::Overwritten);
    }

    #[test]
    fn write_file_onto_directory_is_a_conflict() {
        let mut fs = populated_fs();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let err = service
            .write_file(Path::new("proj/configs"), "x", WriteMode::Overwrite)
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::PathConflict {
                expected: EntryKind::File,
                ..
            })
        ));
    }

    // ── scaffold_test_tree ────────────────────────────────────────────────────

    #[test]
    fn test_tree_writes_each_description_exactly() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let service = ScaffoldService::new(Box::new(empty_fs(writes.clone())), Box::new(catalog()));

        let report = service
            .scaffold_test_tree(Path::new("proj/tests"), WriteMode::SkipExisting)
            .unwrap();

        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 7);
        assert_eq!(
            writes[0],
            (
                PathBuf::from("proj/tests/__init__.py"),
                layout::TESTS_ROOT_DESCRIPTION.to_string()
            )
        );
        for (written, spec) in writes[1..].iter().zip(&layout::TEST_PACKAGES) {
            assert_eq!(
                written.0,
                PathBuf::from("proj/tests").join(spec.name).join("__init__.py")
            );
            assert_eq!(written.1, spec.description);
        }
        // root dir + marker, then a dir + marker per package
        assert_eq!(report.events.len(), 2 + 2 * layout::TEST_PACKAGES.len());
    }

    // ── scaffold_project ──────────────────────────────────────────────────────

    #[test]
    fn fresh_project_gets_every_template() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let service = ScaffoldService::new(Box::new(empty_fs(writes.clone())), Box::new(catalog()));

        let report = service
            .scaffold_project(Path::new("/tmp/myproj"), &ScaffoldOptions::new("0.1.0"))
            .unwrap();

        let writes = writes.lock().unwrap();
        let content_of = |rel: &str| {
            writes
                .iter()
                .find(|(p, _)| p == &Path::new("/tmp/myproj").join(rel))
                .map(|(_, c)| c.clone())
        };
        assert_eq!(
            content_of(".wtf_root_folder").as_deref(),
            Some("root marker template")
        );
        assert_eq!(
            content_of("configs/default.yaml").as_deref(),
            Some("default config template")
        );
        assert!(
            content_of("requirements.txt")
                .unwrap()
                .lines()
                .any(|l| l == "wtframework==0.1.0")
        );
        assert!(content_of("tests/tests/test_example.py").is_none());
        assert_eq!(
            report.outcome_of(Path::new("/tmp/myproj/runtests.py")),
            Some(Outcome::PermissionsSet)
        );
    }

    #[test]
    fn rerun_only_resets_runner_permissions() {
        let mut fs = populated_fs();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_set_permissions()
            .withf(|path, perms| path.ends_with("runtests.py") && perms.mode() == 0o755)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let report = service
            .scaffold_project(Path::new("proj"), &ScaffoldOptions::new("0.1.0"))
            .unwrap();

        assert_eq!(report.mutation_count(), 0);
    }

    #[test]
    fn force_overwrites_templates_but_not_directories() {
        let mut fs = populated_fs();
        fs.expect_create_dir_all().never();
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        // marker, runner, config, tests root marker, six package markers, requirements
        fs.expect_write_file().times(11).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let options = ScaffoldOptions::new("0.1.0").overwrite_templates(true);
        let report = service.scaffold_project(Path::new("proj"), &options).unwrap();

        assert_eq!(report.count(Outcome::Overwritten), 11);
        assert_eq!(report.count(Outcome::Created), 0);
    }

    #[test]
    fn examples_overwrite_even_without_force() {
        let mut fs = populated_fs();
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("tests/tests/test_example.py") && content == "example test"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let options = ScaffoldOptions::new("0.1.0").with_examples(true);
        let report = service.scaffold_project(Path::new("proj"), &options).unwrap();

        assert_eq!(
            report.outcome_of(Path::new("proj/tests/tests/test_example.py")),
            Some(Outcome::Overwritten)
        );
    }

    #[test]
    fn filesystem_failure_aborts_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: permission denied".into(),
            }
            .into())
        });
        fs.expect_set_permissions().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));
        let err = service
            .scaffold_project(Path::new("proj"), &ScaffoldOptions::new("0.1.0"))
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::FilesystemError { ref path, .. })
                if path == Path::new("proj/.wtf_root_folder")
        ));
    }

    #[test]
    fn invalid_version_fails_before_touching_disk() {
        // No expectations: any filesystem call would panic.
        let fs = MockFilesystem::new();
        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog()));

        let err = service
            .scaffold_project(Path::new("proj"), &ScaffoldOptions::new(""))
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Domain(DomainError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn catalog_failure_fails_before_touching_disk() {
        let fs = MockFilesystem::new();
        let mut catalog = MockTemplateCatalog::new();
        catalog.expect_content().returning(|kind| {
            Err(ApplicationError::TemplateUnavailable {
                name: kind.file_name().into(),
                reason: "unreadable".into(),
            }
            .into())
        });

        let service = ScaffoldService::new(Box::new(fs), Box::new(catalog));
        let err = service
            .scaffold_project(Path::new("proj"), &ScaffoldOptions::new("0.1.0"))
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
    }
}
