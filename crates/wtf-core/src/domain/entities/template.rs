use std::fmt;
use std::path::PathBuf;

use super::common::RelativePath;
use crate::domain::DomainError;

/// Fixed templates supplied by a [`TemplateCatalog`](crate::application::TemplateCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Content of `.wtf_root_folder`.
    RootMarker,
    /// Content of `runtests.py`.
    TestRunner,
    /// Content of `configs/default.yaml`.
    DefaultConfig,
}

impl TemplateKind {
    pub const ALL: [Self; 3] = [Self::RootMarker, Self::TestRunner, Self::DefaultConfig];

    /// File name of this template inside a template directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::RootMarker => "root_folder_placeholder",
            Self::TestRunner => "runtests.py",
            Self::DefaultConfig => "default.yaml",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootMarker => write!(f, "root marker"),
            Self::TestRunner => write!(f, "test runner"),
            Self::DefaultConfig => write!(f, "default config"),
        }
    }
}

/// An example file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFile {
    pub path: RelativePath,
    pub content: String,
}

impl ExampleFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            content: content.into(),
        })
    }
}
