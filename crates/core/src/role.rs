//! Role field constraints and validation (mirrors the `roles` table columns).

use crate::error::CoreError;

/// Maximum length of `roles.name`, in characters (`VARCHAR(50)`).
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of `roles.description`, in characters (`VARCHAR(50)`).
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Entity label used in not-found errors.
pub const ROLE_ENTITY: &str = "Role";

/// Validate a role name against the column limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_len("name", name, MAX_NAME_LEN)
}

/// Validate a role description against the column limit.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_len("description", description, MAX_DESCRIPTION_LEN)
}

/// PostgreSQL counts `VARCHAR(n)` in characters, not bytes.
fn validate_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}
