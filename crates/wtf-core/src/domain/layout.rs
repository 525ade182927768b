//! The fixed shape of a WTF project.
//!
//! Everything here is a compile-time constant: names of the directories the
//! scaffolder creates and the descriptions written into each package marker.

use super::entities::common::{Access, Permissions};

/// Sentinel file marking a directory as a WTF project root.
pub const ROOT_MARKER_FILE: &str = ".wtf_root_folder";

/// Test-runner script at the project root.
pub const TEST_RUNNER_FILE: &str = "runtests.py";

/// Package marker written into every test directory.
pub const PACKAGE_MARKER_FILE: &str = "__init__.py";

/// Dependency manifest at the project root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

pub const CONFIGS_DIR: &str = "configs";
pub const DEFAULT_CONFIG_FILE: &str = "default.yaml";
pub const TESTS_DIR: &str = "tests";

/// Package pinned in the dependency manifest.
pub const FRAMEWORK_PACKAGE: &str = "wtframework";

/// Top-level directories created under the project root.
pub const PROJECT_SUBDIRECTORIES: [&str; 7] = [
    "assets",
    "data",
    CONFIGS_DIR,
    "reference-screenshots",
    "reports",
    "screenshots",
    TESTS_DIR,
];

/// A directory under `tests/` and the text of its package marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Content of `tests/__init__.py`.
pub const TESTS_ROOT_DESCRIPTION: &str =
    "'Top level tests folder.  Organize your items in the subfolders below.'";

/// Subdirectories of `tests/`, in creation order.
pub const TEST_PACKAGES: [PackageSpec; 6] = [
    PackageSpec {
        name: "flows",
        description: "'Put reusable multi-page flows here.'",
    },
    PackageSpec {
        name: "models",
        description: "'Put models like database abstractions here.'",
    },
    PackageSpec {
        name: "pages",
        description: "'Put your PageObjects here.'",
    },
    PackageSpec {
        name: "support",
        description: "'Put various utility functions you want to reuse here.'",
    },
    PackageSpec {
        name: "testdata",
        description: "'Put reuseable functions for generating and handling test data here.'",
    },
    PackageSpec {
        name: "tests",
        description: "'Put your high level tests here.'",
    },
];

/// Render `requirements.txt` pinning the framework to `version`.
pub fn requirements_manifest(version: &str) -> String {
    format!(
        "
# Requirements.txt file
# This file contains a list of packages to be installed by PIP
# when setting up this project.

# Wiredrive Test Framework - WTF
{FRAMEWORK_PACKAGE}=={version}

    "
    )
}

/// Owner may read, write and execute; group and other may read and execute.
pub const fn test_runner_permissions() -> Permissions {
    Permissions::new(Access::ALL, Access::READ_EXECUTE, Access::READ_EXECUTE)
}
