//! Domain services: input validation, referential pre-checks and the
//! restrict-on-delete policy, layered over the repos.

pub mod aircraft;
pub mod airlines;
pub mod flights;

use crate::errors::domain::DomainError;

/// Trim a required text field, rejecting blank input.
pub(crate) fn require_text(field: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation_other(format!(
            "{field} must not be blank"
        )));
    }
    Ok(trimmed.to_string())
}
