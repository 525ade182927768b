//! End-to-end scaffolding against the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use wtf_adapters::{BuiltinCatalog, DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
use wtf_core::{
    application::{ScaffoldOptions, ScaffoldService},
    domain::{Outcome, TemplateKind, WriteMode, layout},
};

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(BuiltinCatalog::new()))
}

fn memory_service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(BuiltinCatalog::new()))
}

/// Every file below `root` with its content, sorted by path.
fn tree(root: &Path) -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.push((path.clone(), String::from("<dir>")));
                stack.push(path);
            } else {
                let content = fs::read_to_string(&path).unwrap();
                out.push((path, content));
            }
        }
    }
    out.sort();
    out
}

#[test]
fn fresh_directory_gets_full_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("myproj");

    local_service()
        .scaffold_project(&project, &ScaffoldOptions::new("0.1.0"))
        .unwrap();

    for name in layout::PROJECT_SUBDIRECTORIES {
        assert!(project.join(name).is_dir(), "{name} missing");
    }
    assert_eq!(
        fs::read_to_string(project.join("configs/default.yaml")).unwrap(),
        BuiltinCatalog::text(TemplateKind::DefaultConfig)
    );
    assert_eq!(
        fs::read_to_string(project.join(".wtf_root_folder")).unwrap(),
        BuiltinCatalog::text(TemplateKind::RootMarker)
    );
    let requirements = fs::read_to_string(project.join("requirements.txt")).unwrap();
    assert!(requirements.lines().any(|l| l == "wtframework==0.1.0"));

    assert_eq!(
        fs::read_to_string(project.join("tests/__init__.py")).unwrap(),
        layout::TESTS_ROOT_DESCRIPTION
    );
    for spec in &layout::TEST_PACKAGES {
        let marker = project.join("tests").join(spec.name).join("__init__.py");
        assert_eq!(fs::read_to_string(&marker).unwrap(), spec.description);
    }
    assert!(!project.join("tests/tests/test_search.py").exists());
}

#[cfg(unix)]
#[test]
fn test_runner_is_executable_by_everyone() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    local_service()
        .scaffold_project(tmp.path(), &ScaffoldOptions::new("0.1.0"))
        .unwrap();

    let mode = fs::metadata(tmp.path().join("runtests.py"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn second_run_leaves_tree_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let service = local_service();
    let options = ScaffoldOptions::new("0.1.0");

    service.scaffold_project(tmp.path(), &options).unwrap();
    let first = tree(tmp.path());

    let report = service.scaffold_project(tmp.path(), &options).unwrap();

    assert_eq!(tree(tmp.path()), first);
    assert_eq!(report.mutation_count(), 0);
}

#[test]
fn rerun_keeps_user_edits_and_user_files() {
    let tmp = tempfile::tempdir().unwrap();
    let service = local_service();
    let options = ScaffoldOptions::new("0.1.0");
    service.scaffold_project(tmp.path(), &options).unwrap();

    let config = tmp.path().join("configs/default.yaml");
    fs::write(&config, "timeout: 99\n").unwrap();
    let user_file = tmp.path().join("tests/pages/login_page.py");
    fs::write(&user_file, "class LoginPage: pass\n").unwrap();

    service.scaffold_project(tmp.path(), &options).unwrap();

    assert_eq!(fs::read_to_string(&config).unwrap(), "timeout: 99\n");
    assert_eq!(
        fs::read_to_string(&user_file).unwrap(),
        "class LoginPage: pass\n"
    );
}

#[test]
fn force_restores_templates_but_spares_user_files() {
    let tmp = tempfile::tempdir().unwrap();
    let service = local_service();
    service
        .scaffold_project(tmp.path(), &ScaffoldOptions::new("0.1.0"))
        .unwrap();

    let config = tmp.path().join("configs/default.yaml");
    fs::write(&config, "timeout: 99\n").unwrap();
    let user_file = tmp.path().join("data/users.csv");
    fs::write(&user_file, "alice\n").unwrap();

    let report = service
        .scaffold_project(
            tmp.path(),
            &ScaffoldOptions::new("0.2.0").overwrite_templates(true),
        )
        .unwrap();

    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        BuiltinCatalog::text(TemplateKind::DefaultConfig)
    );
    assert!(
        fs::read_to_string(tmp.path().join("requirements.txt"))
            .unwrap()
            .contains("wtframework==0.2.0")
    );
    assert_eq!(fs::read_to_string(&user_file).unwrap(), "alice\n");
    assert_eq!(report.outcome_of(&config), Some(Outcome::Overwritten));
}

#[test]
fn examples_are_rewritten_on_every_run() {
    let tmp = tempfile::tempdir().unwrap();
    let service = local_service();
    let options = ScaffoldOptions::new("0.1.0").with_examples(true);

    service.scaffold_project(tmp.path(), &options).unwrap();
    let example = tmp.path().join("tests/tests/test_search.py");
    let original = fs::read_to_string(&example).unwrap();
    fs::write(&example, "# my local edits\n").unwrap();

    let report = service.scaffold_project(tmp.path(), &options).unwrap();

    assert_eq!(fs::read_to_string(&example).unwrap(), original);
    assert_eq!(report.outcome_of(&example), Some(Outcome::Overwritten));
}

#[test]
fn file_in_place_of_directory_is_a_conflict() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("reports"), "not a directory").unwrap();

    let err = local_service()
        .scaffold_project(tmp.path(), &ScaffoldOptions::new("0.1.0"))
        .unwrap_err();

    assert!(err.to_string().contains("reports"));
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn dry_run_reports_a_real_first_run_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("myproj");
    let options = ScaffoldOptions::new("0.1.0").with_examples(true);

    let dry = ScaffoldService::new(
        Box::new(DryRunFilesystem::new(LocalFilesystem::new())),
        Box::new(BuiltinCatalog::new()),
    );
    let planned = dry.scaffold_project(&project, &options).unwrap();
    assert!(!project.exists());

    let actual = local_service().scaffold_project(&project, &options).unwrap();
    assert_eq!(planned, actual);
}

#[test]
fn memory_filesystem_matches_layout() {
    let memory = MemoryFilesystem::new();
    let service = memory_service(&memory);
    let root = Path::new("/work/myproj");

    let report = service
        .scaffold_project(root, &ScaffoldOptions::new("0.1.0"))
        .unwrap();

    assert!(memory.is_executable(&root.join("runtests.py")));
    // marker, runner, config, 7 package markers, requirements
    assert_eq!(memory.snapshot().len(), 11);
    assert_eq!(report.count(Outcome::Created), memory.snapshot().len() + 14);
}

#[test]
fn test_tree_alone_can_be_scaffolded() {
    let memory = MemoryFilesystem::new();
    let service = memory_service(&memory);
    let tests_root = Path::new("/work/tests");

    service
        .scaffold_test_tree(tests_root, WriteMode::SkipExisting)
        .unwrap();

    for spec in &layout::TEST_PACKAGES {
        let marker = tests_root.join(spec.name).join("__init__.py");
        assert_eq!(memory.read_file(&marker).as_deref(), Some(spec.description));
    }
}
