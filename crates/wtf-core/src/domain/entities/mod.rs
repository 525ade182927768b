pub mod common;
pub mod report;
pub mod template;
