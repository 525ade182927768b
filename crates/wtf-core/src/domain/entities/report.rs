use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What to do when a template file is already on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Leave the existing file alone.
    #[default]
    SkipExisting,
    /// Replace its content unconditionally.
    Overwrite,
}

impl WriteMode {
    pub fn overwrite_if(flag: bool) -> Self {
        if flag { Self::Overwrite } else { Self::SkipExisting }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Result of a single ensure/write step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Created,
    Exists,
    Overwritten,
    PermissionsSet,
}

impl Outcome {
    /// `true` if the step changed file or directory contents.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Created | Self::Overwritten)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Exists => write!(f, "exists"),
            Self::Overwritten => write!(f, "overwritten"),
            Self::PermissionsSet => write!(f, "permissions-set"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldEvent {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

impl ScaffoldEvent {
    pub fn directory(path: &Path, outcome: Outcome) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: EntryKind::Directory,
            outcome,
        }
    }

    pub fn file(path: &Path, outcome: Outcome) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: EntryKind::File,
            outcome,
        }
    }
}

/// Ordered log of everything a scaffold run did (or would do).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub events: Vec<ScaffoldEvent>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: ScaffoldEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, other: ScaffoldReport) {
        self.events.extend(other.events);
    }

    /// Number of steps that created or overwritten something.
    pub fn mutation_count(&self) -> usize {
        self.events.iter().filter(|e| e.outcome.is_mutation()).count()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.events.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn outcome_of(&self, path: &Path) -> Option<Outcome> {
        self.events
            .iter()
            .rev()
            .find(|e| e.path == path)
            .map(|e| e.outcome)
    }
}
