//! Type definitions for the document store gateway

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::error::{StoreError, StoreResult};

/// A stored document: a JSON object keyed by field name
pub type Document = Map<String, Value>;

/// Field holding the generated document identifier
pub const ID_FIELD: &str = "_id";

/// Field holding the insertion timestamp
pub const CREATED_AT_FIELD: &str = "created_at";

/// Field holding the last update timestamp
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Upper bound on collection names reported by a health check
pub const MAX_HEALTH_COLLECTIONS: usize = 10;

static COLLECTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").expect("Valid regex pattern"));

/// Reject collection names that are empty or could escape a backend's namespace
pub fn validate_collection(name: &str) -> StoreResult<()> {
    if COLLECTION_NAME.is_match(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidCollection(name.to_string()))
    }
}

/// Serialize a payload into a fresh document stamped with id and timestamps
///
/// Returns the generated id together with the document.
pub fn new_document<T: Serialize + ?Sized>(payload: &T) -> StoreResult<(String, Document)> {
    let mut document = match serde_json::to_value(payload)? {
        Value::Object(map) => map,
        other => {
            return Err(StoreError::serialization(format!(
                "document payload must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let id = Uuid::new_v4().to_string();
    let now = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true));
    document.insert(CREATED_AT_FIELD.to_string(), now.clone());
    document.insert(UPDATED_AT_FIELD.to_string(), now);
    document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

    Ok((id, document))
}

/// Stringified `_id` of a document, if present
pub fn document_id(document: &Document) -> Option<String> {
    match document.get(ID_FIELD)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Top-level field equality filter; an empty filter matches every document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    fields: Map<String, Value>,
}

impl DocumentFilter {
    /// Filter matching all documents
    pub fn all() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Check whether a document satisfies every condition
    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Health snapshot of the store, used by diagnostics only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreHealth {
    /// A backend is configured (a connection string was supplied)
    pub configured: bool,
    /// The backend answered a collection listing
    pub reachable: bool,
    pub backend: String,
    pub database: Option<String>,
    /// Up to [`MAX_HEALTH_COLLECTIONS`] collection names, sorted
    pub collections: Vec<String>,
    pub error: Option<String>,
}

impl StoreHealth {
    /// Health of a configured backend that listed its collections
    pub fn reachable(backend: &str, database: &str, mut collections: Vec<String>) -> Self {
        collections.sort();
        collections.truncate(MAX_HEALTH_COLLECTIONS);
        Self {
            configured: true,
            reachable: true,
            backend: backend.to_string(),
            database: Some(database.to_string()),
            collections,
            error: None,
        }
    }

    /// Health of a configured backend whose listing failed
    pub fn degraded(backend: &str, database: &str, error: &StoreError) -> Self {
        Self {
            configured: true,
            reachable: false,
            backend: backend.to_string(),
            database: Some(database.to_string()),
            collections: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Health when no backend is configured at all
    pub fn not_configured(backend: &str) -> Self {
        Self {
            configured: false,
            reachable: false,
            backend: backend.to_string(),
            database: None,
            collections: Vec::new(),
            error: None,
        }
    }
}
