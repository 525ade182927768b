//! Command handlers, one per entry point.

pub mod completions;
pub mod init;
