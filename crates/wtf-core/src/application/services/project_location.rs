//! Deciding where a project gets scaffolded.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Answerer},
    domain::DomainValidator,
    error::ScaffoldResult,
};

/// Resolve the project directory.
///
/// With a name, the project lives at `cwd/name` (an absolute name is used
/// as-is). Without one, the answerer is asked whether the current directory
/// should be initialized; declining yields [`ApplicationError::Cancelled`].
#[instrument(skip(answerer, cwd), fields(cwd = %cwd.display()))]
pub fn resolve_project_dir(
    name: Option<&str>,
    cwd: &Path,
    answerer: &dyn Answerer,
) -> ScaffoldResult<PathBuf> {
    match name {
        Some(name) => {
            DomainValidator::validate_project_name(name)?;
            let dir = cwd.join(name);
            debug!(path = %dir.display(), "Project directory from argument");
            Ok(dir)
        }
        None => {
            if answerer.confirm(&project_prompt(cwd))? {
                debug!("Initializing the current directory");
                Ok(cwd.to_path_buf())
            } else {
                info!("User declined to initialize the current directory");
                Err(ApplicationError::Cancelled.into())
            }
        }
    }
}

/// The question asked when no project name was given.
pub fn project_prompt(cwd: &Path) -> String {
    format!(
        "Would you like to initialize your wtframework project here: {}? (Y/n)",
        cwd.display()
    )
}

/// Interpret a typed answer: `n` or `no` (any case) declines, anything else
/// (including an empty line) accepts.
pub fn interpret_answer(input: &str) -> bool {
    let answer = input.trim().to_ascii_lowercase();
    !matches!(answer.as_str(), "n" | "no")
}
