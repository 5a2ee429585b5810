//! Automation workflows tracked per company

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{Validate, ValidationErrors};

/// Business area a workflow automates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowCategory {
    Marketing,
    Analyse,
    Klantenservice,
    Hr,
    Financien,
    Operations,
}

impl WorkflowCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Analyse => "analyse",
            Self::Klantenservice => "klantenservice",
            Self::Hr => "hr",
            Self::Financien => "financien",
            Self::Operations => "operations",
        }
    }
}

impl fmt::Display for WorkflowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    #[default]
    Gepland,
    Actief,
    Gepauzeerd,
}

impl WorkflowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gepland => "gepland",
            Self::Actief => "actief",
            Self::Gepauzeerd => "gepauzeerd",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Links the workflow to a company; free text, not checked
    pub company_name: String,
    pub category: WorkflowCategory,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: WorkflowStatus,
}

impl Validate for Workflow {
    fn violations(&self) -> ValidationErrors {
        Vec::new()
    }
}
