//! Business endpoint handlers
//!
//! Persistence policy per endpoint: quickscan and contact writes are
//! best-effort, workflow creation surfaces store failures, and the two
//! listings fall back to static content when the store cannot be read.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ApiError;
use super::extract::ValidatedJson;
use super::ApiState;
use crate::advice;
use crate::schema::{
    AdviceReport, Collection, ContactRequest, Pitch, PitchMessage, QuickScan, Workflow,
};
use crate::store::{self, document_id, BestEffort, Document, DocumentFilter, ID_FIELD};

/// Stored workflows appended to the use-case catalogue
pub const USE_CASE_WORKFLOW_LIMIT: usize = 50;

/// Stored workflows returned by the workflow listing
pub const WORKFLOW_LIST_LIMIT: usize = 100;

pub const CONTACT_THANKS: &str = "Dank voor je bericht! We nemen snel contact op.";

/// Catalogue entry of `GET /api/use-cases`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    pub category: String,
    pub title: String,
    pub description: String,
}

impl UseCase {
    fn new(category: &str, title: &str, description: &str) -> Self {
        Self {
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Map a stored workflow, defaulting missing text fields
    fn from_document(doc: &Document) -> Self {
        let text = |field: &str, default: &str| {
            doc.get(field)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };
        Self {
            category: text("category", "overig"),
            title: text("title", "Workflow"),
            description: text("description", ""),
        }
    }
}

/// Fixed use cases shown before any stored workflows
pub fn static_use_cases() -> Vec<UseCase> {
    vec![
        UseCase::new("marketing", "Social media calendar", "Automatisch posts genereren en plannen."),
        UseCase::new("analyse", "KPI samenvattingen", "Wekelijkse inzichten en trends."),
        UseCase::new("klantenservice", "FAQ chatbot", "Snelle antwoorden met je eigen kennisbank."),
        UseCase::new("hr", "Vacature screening", "CV's scoren en samenvatten met AI."),
    ]
}

/// Sample workflows returned when the store cannot be read
pub fn fallback_workflows() -> Vec<Value> {
    vec![
        json!({"id": "1", "category": "marketing", "title": "Social posts", "status": "actief"}),
        json!({"id": "2", "category": "klantenservice", "title": "FAQ chatbot", "status": "gepland"}),
    ]
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: String,
    pub status: String,
}

pub async fn submit_quickscan(
    State(state): State<Arc<ApiState>>,
    ValidatedJson(scan): ValidatedJson<QuickScan>,
) -> Json<AdviceReport> {
    // Advice does not depend on the write
    let _stored = store::create_document(state.store.as_ref(), QuickScan::NAME, &scan)
        .await
        .best_effort(QuickScan::NAME);

    let report = advice::evaluate(&scan);
    info!(
        company = %scan.company_name,
        recommendations = report.recommendations.len(),
        "QuickScan evaluated"
    );
    Json(report)
}

pub async fn list_use_cases(State(state): State<Arc<ApiState>>) -> Json<ItemList<UseCase>> {
    let mut items = static_use_cases();

    match store::get_documents(
        state.store.as_ref(),
        Workflow::NAME,
        &DocumentFilter::all(),
        USE_CASE_WORKFLOW_LIMIT,
    )
    .await
    {
        Ok(docs) => items.extend(docs.iter().map(UseCase::from_document)),
        Err(e) => warn!("Serving static use cases only: {}", e),
    }

    Json(ItemList { items })
}

pub async fn submit_contact(
    State(state): State<Arc<ApiState>>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Json<StatusMessage> {
    let _stored = store::create_document(state.store.as_ref(), ContactRequest::NAME, &request)
        .await
        .best_effort(ContactRequest::NAME);

    Json(StatusMessage {
        status: "ok".to_string(),
        message: CONTACT_THANKS.to_string(),
    })
}

pub async fn generate_pitch(
    State(state): State<Arc<ApiState>>,
    ValidatedJson(pitch): ValidatedJson<Pitch>,
) -> Result<Json<PitchMessage>, ApiError> {
    Ok(Json(state.templater.render(&pitch)?))
}

pub async fn list_workflows(State(state): State<Arc<ApiState>>) -> Json<ItemList<Value>> {
    let docs = store::get_documents(
        state.store.as_ref(),
        Workflow::NAME,
        &DocumentFilter::all(),
        WORKFLOW_LIST_LIMIT,
    )
    .await;

    let items = match docs {
        Ok(docs) => docs.into_iter().map(with_public_id).collect(),
        Err(e) => {
            warn!("Serving sample workflows: {}", e);
            fallback_workflows()
        }
    };

    Json(ItemList { items })
}

pub async fn create_workflow(
    State(state): State<Arc<ApiState>>,
    ValidatedJson(workflow): ValidatedJson<Workflow>,
) -> Result<Json<Created>, ApiError> {
    let id = store::create_document(state.store.as_ref(), Workflow::NAME, &workflow).await?;
    info!(
        id = %id,
        category = %workflow.category,
        status = %workflow.status,
        "Workflow created"
    );

    Ok(Json(Created {
        id,
        status: "ok".to_string(),
    }))
}

/// Expose the store id as `id`
fn with_public_id(mut doc: Document) -> Value {
    let id = document_id(&doc).unwrap_or_default();
    doc.remove(ID_FIELD);
    doc.insert("id".to_string(), Value::String(id));
    Value::Object(doc)
}
