//! Field-level validation for inbound payloads

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Local part and domain labels accept any Unicode letter or digit; the
/// top-level domain is letters or a punycode label.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}.!#$%&'*+/=?^_`{|}~-]+@[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?)*\.(?:\p{L}{2,}|xn--[a-z0-9-]+)$",
    )
    .expect("Valid regex pattern")
});

/// A constraint violation on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All violations found in one payload
pub type ValidationErrors = Vec<ValidationError>;

/// Constraint checks that run after deserialization
pub trait Validate {
    /// Collect every violation; an empty list means the payload is valid
    fn violations(&self) -> ValidationErrors;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = self.violations();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Check that `value` lies in `min..=max`
pub(crate) fn check_range(
    errors: &mut ValidationErrors,
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) {
    if value < min || value > max {
        errors.push(ValidationError::new(
            field,
            format!("ensure this value is between {min} and {max}"),
        ));
    }
}

/// Check an address against the `local@domain.tld` shape
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_REGEX.is_match(address)
}
