use super::super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative and to stay below its root.
///
/// Invariant: never absolute and never contains `..`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        if path.as_os_str().is_empty() {
            return Err(DomainError::PathEscapesRoot {
                path: String::new(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against a root directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Access rights for one permission class (owner, group or other).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    read: bool,
    write: bool,
    execute: bool,
}

impl Access {
    pub const NONE: Self = Self::new(false, false, false);
    pub const READ: Self = Self::new(true, false, false);
    pub const READ_WRITE: Self = Self::new(true, true, false);
    pub const READ_EXECUTE: Self = Self::new(true, false, true);
    pub const ALL: Self = Self::new(true, true, true);

    pub const fn new(read: bool, write: bool, execute: bool) -> Self {
        Self {
            read,
            write,
            execute,
        }
    }

    /// The three permission bits of this class, `rwx` = `0b111`.
    pub const fn bits(&self) -> u32 {
        (self.read as u32) << 2 | (self.write as u32) << 1 | self.execute as u32
    }

    pub const fn can_execute(&self) -> bool {
        self.execute
    }

    fn symbolic(&self) -> [char; 3] {
        [
            if self.read { 'r' } else { '-' },
            if self.write { 'w' } else { '-' },
            if self.execute { 'x' } else { '-' },
        ]
    }
}

/// Unix-style permissions built class by class.
///
/// The numeric mode is derived from the classes, so there is no octal
/// literal to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    owner: Access,
    group: Access,
    other: Access,
}

impl Permissions {
    pub const fn new(owner: Access, group: Access, other: Access) -> Self {
        Self {
            owner,
            group,
            other,
        }
    }

    /// `rw-r--r--`
    pub const fn read_write() -> Self {
        Self::new(Access::READ_WRITE, Access::READ, Access::READ)
    }

    /// Numeric mode, e.g. `0o755`.
    pub const fn mode(&self) -> u32 {
        self.owner.bits() << 6 | self.group.bits() << 3 | self.other.bits()
    }

    /// `true` if every class may execute.
    pub const fn executable_by_all(&self) -> bool {
        self.owner.can_execute() && self.group.can_execute() && self.other.can_execute()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in [self.owner, self.group, self.other] {
            for c in class.symbolic() {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
