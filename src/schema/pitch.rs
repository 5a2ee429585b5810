//! Outreach pitch input and rendered output

use serde::{Deserialize, Serialize};

use super::validation::{Validate, ValidationErrors};

/// Register of the rendered pitch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Formeel,
    #[default]
    Vriendelijk,
    ToThePoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub pain_points: Option<Vec<String>>,
    #[serde(default)]
    pub tone: Tone,
}

impl Validate for Pitch {
    fn violations(&self) -> ValidationErrors {
        Vec::new()
    }
}

/// Rendered outreach e-mail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchMessage {
    pub subject: String,
    pub body: String,
}
