//! Templates compiled into the binary.

use wtf_core::{
    application::ports::TemplateCatalog,
    domain::{ExampleFile, TemplateKind},
    error::ScaffoldResult,
};

const ROOT_MARKER: &str = include_str!("../../templates/root_folder_placeholder");
const TEST_RUNNER: &str = include_str!("../../templates/runtests.py");
const DEFAULT_CONFIG: &str = include_str!("../../templates/default.yaml");

/// Example files, keyed by their path relative to the project root.
const EXAMPLES: [(&str, &str); 4] = [
    (
        "tests/pages/search_page.py",
        include_str!("../../templates/examples/tests/pages/search_page.py"),
    ),
    (
        "tests/flows/search_flow.py",
        include_str!("../../templates/examples/tests/flows/search_flow.py"),
    ),
    (
        "tests/testdata/search_terms.py",
        include_str!("../../templates/examples/tests/testdata/search_terms.py"),
    ),
    (
        "tests/tests/test_search.py",
        include_str!("../../templates/examples/tests/tests/test_search.py"),
    ),
];

/// The templates that ship with wtf-init.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn text(kind: TemplateKind) -> &'static str {
        match kind {
            TemplateKind::RootMarker => ROOT_MARKER,
            TemplateKind::TestRunner => TEST_RUNNER,
            TemplateKind::DefaultConfig => DEFAULT_CONFIG,
        }
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn content(&self, kind: TemplateKind) -> ScaffoldResult<String> {
        Ok(Self::text(kind).to_string())
    }

    fn examples(&self) -> ScaffoldResult<Vec<ExampleFile>> {
        EXAMPLES
            .iter()
            .map(|(path, content)| ExampleFile::new(*path, *content).map_err(Into::into))
            .collect()
    }
}
