//! Contact form intake

use serde::{Deserialize, Serialize};

use super::validation::{is_valid_email, Validate, ValidationError, ValidationErrors};

/// Reason for getting in touch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Offerte,
    #[default]
    Kennismaking,
    Advies,
    Overig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub topic: Topic,
}

impl Validate for ContactRequest {
    fn violations(&self) -> ValidationErrors {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(ValidationError::new(
                "email",
                "value is not a valid email address",
            ));
        }
        errors
    }
}
