use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a user-supplied project name or path.
    ///
    /// Anything the OS accepts as a directory name is fine (`.`, `..`,
    /// `.hidden`, `../work/myproj`); only blank names are rejected.
    pub fn validate_project_name(raw: &str) -> Result<(), DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: raw.into(),
                reason: "name cannot be empty".into(),
            });
        }
        Ok(())
    }

    /// The version ends up as `wtframework==<version>`; it has to be one token.
    pub fn validate_tool_version(version: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        };

        if version.is_empty() {
            return Err(invalid("version cannot be empty"));
        }
        if version.chars().any(char::is_whitespace) {
            return Err(invalid("version cannot contain whitespace"));
        }
        Ok(())
    }
}
