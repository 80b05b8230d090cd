use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a store identifier from its textual form.
///
/// Accepts any textual UUID form (hyphenated, simple, braced or URN).
///
/// # Arguments
/// - `value` - The string to attempt to parse into a `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(uuid::Error)` - The string is not a structurally valid identifier
pub fn parse_identifier(value: &str) -> Result<Uuid, uuid::Error> {
    Uuid::parse_str(value)
}

/// Parses an identifier that has already passed validation.
///
/// # Arguments
/// - `field` - Name of the field the value was read from, for the error message
/// - `value` - The validated value
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(AppError::InternalError)` - The value was missing or malformed, meaning
///   validation did not run before this call
pub fn parse_validated_identifier(field: &str, value: Option<&str>) -> Result<Uuid, AppError> {
    let value = value.unwrap_or_default();

    parse_identifier(value).map_err(|e| {
        AppError::InternalError(format!(
            "Failed to parse validated identifier '{field}' from '{value}': {e}"
        ))
    })
}
