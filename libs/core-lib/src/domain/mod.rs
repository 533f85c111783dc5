// Declare modules within the domain directory
pub mod plant;
pub mod portfolio;
pub mod tenant;

use crate::CoreError;

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn required(field: &str, value: String) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
