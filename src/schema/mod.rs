//! Request and response payloads
//!
//! Every inbound payload implements [`Validate`]; enumerated fields are
//! closed Rust enums, so serde already rejects values outside their sets.
//! Persisted entities name their collection through [`Collection`].

pub mod advice;
pub mod contact;
pub mod pitch;
pub mod quickscan;
pub mod validation;
pub mod workflow;

pub use advice::{AdviceItem, AdviceReport, Level};
pub use contact::{ContactRequest, Topic};
pub use pitch::{Pitch, PitchMessage, Tone};
pub use quickscan::QuickScan;
pub use validation::{is_valid_email, Validate, ValidationError, ValidationErrors};
pub use workflow::{Workflow, WorkflowCategory, WorkflowStatus};

/// Entity stored in a document collection named after it
pub trait Collection {
    /// Lowercased entity name
    const NAME: &'static str;
}

impl Collection for QuickScan {
    const NAME: &'static str = "quickscan";
}

impl Collection for Workflow {
    const NAME: &'static str = "workflow";
}

impl Collection for ContactRequest {
    const NAME: &'static str = "contactrequest";
}
