//! Application layer errors.
//!
//! These errors represent failures talking to the outside world. Input
//! validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::EntryKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A path exists but is not the kind of entry the layout needs.
    #[error("{path} exists but is not a {expected}")]
    PathConflict { path: PathBuf, expected: EntryKind },

    /// The user declined to continue.
    #[error("Operation cancelled")]
    Cancelled,

    /// Reading an answer from the user failed.
    #[error("Could not read an answer: {reason}")]
    PromptFailed { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,

    /// A template could not be loaded from its catalog.
    #[error("Template '{name}' unavailable: {reason}")]
    TemplateUnavailable { name: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PathConflict { path, expected } => vec![
                format!("Move or rename '{}'", path.display()),
                format!("wtf-init needs a {} at that location", expected),
            ],
            Self::Cancelled => vec![
                "Nothing was created".into(),
                "Pass a project name, or --yes to use the current directory".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass a project name, or --yes to skip the question".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
            Self::TemplateUnavailable { name, .. } => vec![
                format!("Check the '{}' file in your template directory", name),
                "Unset WTF_TEMPLATES_DIR to use the built-in templates".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::PathConflict { .. } => ErrorCategory::Conflict,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::TemplateUnavailable { .. } => ErrorCategory::Configuration,
        }
    }
}
