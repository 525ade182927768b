//! Template catalogs.

mod builtin;
mod directory;

pub use builtin::BuiltinCatalog;
pub use directory::DirectoryCatalog;
