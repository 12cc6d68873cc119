use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;

/// Email syntax check: local part, one `@`, dotted domain.
/// - Valid: "john@email.com", "a.b+c@sub.domain.org"
/// - Invalid: "john@", "@x.com", "john@com", "a b@x.com"
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Trims `value` and rejects it if nothing is left. The trimmed string
/// is what gets persisted.
pub fn non_empty(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!(
            "Field '{}' cannot be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

pub fn email(value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if !EMAIL_REGEX.is_match(trimmed) {
        return Err(ApiError::Validation(format!(
            "'{}' is not a valid email address",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}
