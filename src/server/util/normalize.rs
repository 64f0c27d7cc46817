//! Input normalization shared by the entity services.
//!
//! Each function either returns the canonical stored form of a value or the
//! validation error the API reports for it.

use entity::result::ResultType;
use validator::ValidateEmail;

use crate::server::error::validation::ValidationError;

/// Trims a name, rejecting blank input.
pub fn name(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    Ok(trimmed.to_string())
}

/// Trims an optional free-text field, mapping blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes `#RGB`, `RGB`, `#RRGGBB` or `RRGGBB` to upper case `#RRGGBB`.
pub fn color(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidColor);
    }

    let expanded = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_string(),
        _ => return Err(ValidationError::InvalidColor),
    };

    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}

/// Validates an optional ISO 3166 alpha-2 code, stored upper case.
pub fn nationality(value: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(code) = optional_text(value) else {
        return Ok(None);
    };

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidNationality);
    }

    Ok(Some(code.to_ascii_uppercase()))
}

pub fn driver_number(number: i32) -> Result<i32, ValidationError> {
    if number < 0 {
        return Err(ValidationError::InvalidDriverNumber);
    }

    Ok(number)
}

/// Positions are required and positive for finishers and dropped otherwise.
pub fn position(
    result_type: ResultType,
    position: Option<i32>,
) -> Result<Option<i32>, ValidationError> {
    match result_type {
        ResultType::Finished => match position {
            Some(p) if p > 0 => Ok(Some(p)),
            _ => Err(ValidationError::InvalidPosition),
        },
        ResultType::Dns | ResultType::Dnf | ResultType::Dsq => Ok(None),
    }
}

/// Points must be finite, non-negative and a multiple of 0.5.
pub fn point(point: f64) -> Result<f64, ValidationError> {
    if !point.is_finite() || point < 0.0 || (point * 2.0).fract() != 0.0 {
        return Err(ValidationError::InvalidPoint);
    }

    Ok(point)
}

/// Usernames are trimmed and 3 to 32 characters long.
pub fn username(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if !(3..=32).contains(&len) {
        return Err(ValidationError::InvalidUsername);
    }

    Ok(trimmed.to_string())
}

/// Emails are trimmed and lower cased, then must be a valid address with a
/// dotted domain.
pub fn email(value: &str) -> Result<String, ValidationError> {
    let email = value.trim().to_lowercase();

    let dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));

    if !email.validate_email() || !dotted_domain {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(email)
}

pub fn password(value: &str) -> Result<&str, ValidationError> {
    if value.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(value)
}
