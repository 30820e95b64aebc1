//! Required-field checks used by the form front end before it touches the store.

use crate::errors::AppError;

/// Fails with a validation error when `value` is empty or only whitespace.
pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Create needs every field filled in.
pub fn validate_new_contact(name: &str, phone: &str, email: &str) -> Result<(), AppError> {
    require("Name", name)?;
    require("Phone", phone)?;
    require("Email", email)
}

/// Blank input means "leave unchanged".
pub fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
