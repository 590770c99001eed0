// Utility functions

use crate::types::*;

/// Validates a value against a constraint and returns an error if it fails
pub fn validate<T, F>(
    value: T,
    constraint: F,
    error_message: impl Into<String>,
) -> HotelResult<T>
where
    F: FnOnce(&T) -> bool,
{
    if constraint(&value) {
        Ok(value)
    } else {
        Err(HotelError::ValidationError(error_message.into()))
    }
}

/// Validates a string against common constraints
pub struct StringValidator;

impl StringValidator {
    /// Validates that a string is not empty
    pub fn not_empty(value: impl Into<String>, param_name: &str) -> HotelResult<String> {
        let value = value.into();
        validate(
            value,
            |s| !s.is_empty(),
            format!("{} cannot be empty", param_name),
        )
    }
}

/// Parse a review score out of scraped text.
///
/// The scrape source reports scores from locales that use a comma decimal
/// separator, so "8,5" and "8.5" both parse to 8.5. Anything that is not a
/// number after that normalization is a validation error.
pub fn parse_review(raw: &str) -> HotelResult<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| HotelError::ValidationError("invalid review value".to_string()))
}
