use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required { field: &'static str },
    NotNumeric { field: &'static str },
    InvalidDate { input: String },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is a required parameter"),
            Self::NotNumeric { field } => write!(f, "{field} must be a number"),
            Self::InvalidDate { input } => write!(f, "invalid send date: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty (or whitespace-only) values. Returns the trimmed value.
pub fn require_non_empty<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(ValidationError::Required { field }),
    }
}

/// Like [`require_non_empty`], and additionally require `^[0-9]+$`.
pub fn require_numeric<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    let value = require_non_empty(value, field)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric { field });
    }
    Ok(value)
}
