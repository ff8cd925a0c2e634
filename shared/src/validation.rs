//! Input validation functions
//!
//! Range checks applied to user input before it reaches the calculators or
//! the database.

use crate::errors::ValidationError;

pub const MIN_AGE: u32 = 10;
pub const MAX_AGE: u32 = 100;
pub const MIN_HEIGHT_CM: f64 = 50.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MIN_GIRTH_CM: f64 = 1.0;
pub const MAX_GIRTH_CM: f64 = 500.0;

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Unwrap a required request field
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Unwrap a required text field, treating blank input as missing
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age",
            min: f64::from(MIN_AGE),
            max: f64::from(MAX_AGE),
        });
    }
    Ok(())
}

pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    check_range("height_cm", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    check_range("weight_kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Body girth in centimeters. The range fits the two-decimal girth columns.
pub fn validate_girth_cm(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_range(field, value, MIN_GIRTH_CM, MAX_GIRTH_CM)
}

// ============================================================================
// Account Validation
// ============================================================================

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if email.len() > 255 {
        return Err(ValidationError::Invalid("Email too long".to_string()));
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|e| ValidationError::Invalid(e.to_string()))?;
    if !email_regex.is_match(email) {
        return Err(ValidationError::Invalid("Invalid email format".to_string()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 {
        return Err(ValidationError::Invalid(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if password.len() > 128 {
        return Err(ValidationError::Invalid("Password too long".to_string()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::Invalid("Name too long".to_string()));
    }
    Ok(())
}
