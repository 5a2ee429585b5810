//! End-to-end tests for the HTTP surface
//!
//! Drives the axum router in-process against memory, file and disconnected
//! stores.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use flomote::api::{router, ApiState, EnvStatus};
use flomote::store::backends::{DisconnectedBackend, MemoryBackend};
use flomote::store::{get_documents, DocumentFilter, SharedStore, StoreConfig, StoreFactory};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_with(store: SharedStore) -> Router {
    let env = EnvStatus {
        database_url_set: true,
        database_name_set: true,
    };
    router(ApiState::new(store, env).unwrap())
}

fn memory_store() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new("flomote-test"))
}

fn disconnected_app() -> Router {
    router(ApiState::new(Arc::new(DisconnectedBackend), EnvStatus::default()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn titles(report: &Value) -> Vec<String> {
    report["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn root_reports_liveness() {
    let (status, body) = send(disconnected_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Flomote Backend running");
}

#[tokio::test]
async fn diagnostics_never_fail() {
    let (status, body) = send(disconnected_app(), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn unsupported_store_url_still_serves_requests() {
    let config = StoreConfig::from_connection(Some("mongodb://localhost:27017"), Some("crm")).unwrap();
    let store = StoreFactory::from_config(&config).await.unwrap();
    let env = EnvStatus {
        database_url_set: true,
        database_name_set: true,
    };
    let app = router(ApiState::new(store, env).unwrap());

    let scan = json!({"company_name": "Acme", "sector": "bouw", "employees": 3});
    let (status, report) = send(app.clone(), post_json("/api/quickscan", scan)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&report).len(), 1);

    let (status, body) = send(app.clone(), get("/api/use-cases")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 4);

    let (_, body) = send(app, get("/test")).await;
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["database_url"], "✅ Set");
}

#[tokio::test]
async fn diagnostics_list_collections_when_connected() {
    let store = memory_store();
    let app = app_with(store.clone());

    let scan = json!({"company_name": "Acme", "sector": "it", "employees": 2});
    send(app.clone(), post_json("/api/quickscan", scan)).await;

    let (_, body) = send(app, get("/test")).await;
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["collections"], json!(["quickscan"]));
}

#[tokio::test]
async fn quickscan_returns_advice_and_stores_submission() {
    let store = memory_store();
    let app = app_with(store.clone());

    let scan = json!({
        "company_name": "Acme",
        "sector": "SaaS",
        "employees": 10,
        "challenges": ["Analyse"]
    });
    let (status, report) = send(app, post_json("/api/quickscan", scan)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(&report),
        vec![
            "Website chatbot / FAQ bot",
            "Inbox triage met AI",
            "Factuurverwerking (OCR + boeking)",
            "Rapportage samenvattingen",
        ]
    );
    assert_eq!(report["recommendations"][2]["category"], "financien");
    assert_eq!(report["recommendations"][2]["impact"], "hoog");
    assert!(report["summary"].as_str().unwrap().starts_with("We hebben kansen"));

    let stored = get_documents(store.as_ref(), "quickscan", &DocumentFilter::all(), 10)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["company_name"], "Acme");
    assert!(stored[0].contains_key("created_at"));
}

#[tokio::test]
async fn quickscan_survives_store_outage() {
    let scan = json!({"company_name": "Bol", "sector": "landbouw", "employees": 3});
    let (status, report) = send(disconnected_app(), post_json("/api/quickscan", scan)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&report), vec!["Proces intake workshop"]);
    assert_eq!(report["recommendations"][0]["category"], "operations");
}

#[tokio::test]
async fn quickscan_rejects_out_of_range_employees() {
    let store = memory_store();
    let app = app_with(store.clone());

    for employees in [0, 501] {
        let scan = json!({"company_name": "X", "sector": "it", "employees": employees});
        let (status, body) = send(app.clone(), post_json("/api/quickscan", scan)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body", "employees"]));
    }
    assert_eq!(store.count("quickscan").await, 0);
}

#[tokio::test]
async fn quickscan_rejects_wrong_types_and_bad_json() {
    let app = disconnected_app();

    let scan = json!({"company_name": "X", "sector": "it", "employees": "many"});
    let (status, _) = send(app.clone(), post_json("/api/quickscan", scan)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/quickscan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_is_acknowledged_and_stored() {
    let store = memory_store();
    let app = app_with(store.clone());

    let contact = json!({"name": "Jan", "email": "jan@example.nl", "message": "Bel me"});
    let (status, body) = send(app, post_json("/api/contact", contact)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Dank voor je bericht! We nemen snel contact op.");

    let stored = get_documents(store.as_ref(), "contactrequest", &DocumentFilter::all(), 10)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["topic"], "kennismaking");
}

#[tokio::test]
async fn contact_with_invalid_email_is_rejected_before_persisting() {
    let store = memory_store();
    let app = app_with(store.clone());

    let contact = json!({"name": "Jan", "email": "not-an-email"});
    let (status, body) = send(app, post_json("/api/contact", contact)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"][1], "email");
    assert_eq!(store.count("contactrequest").await, 0);
}

#[tokio::test]
async fn contact_survives_store_outage() {
    let contact = json!({"name": "Jan", "email": "jan@example.nl", "topic": "offerte"});
    let (status, body) = send(disconnected_app(), post_json("/api/contact", contact)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn contact_rejects_unknown_topic() {
    let contact = json!({"name": "Jan", "email": "jan@example.nl", "topic": "klacht"});
    let (status, _) = send(disconnected_app(), post_json("/api/contact", contact)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn pitch_is_rendered() {
    let pitch = json!({"name": "Jansen", "tone": "formeel"});
    let (status, body) = send(disconnected_app(), post_json("/api/pitch", pitch)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], "Slimmer werken met AI – voorstel");
    let text = body["body"].as_str().unwrap();
    assert!(text.starts_with("Geachte Jansen,"));
    assert!(text.contains("terugkerende handmatige taken"));
}

#[tokio::test]
async fn pitch_includes_company_and_pains() {
    let pitch = json!({
        "name": "Eva",
        "company": "Acme",
        "pain_points": ["facturen", "mail"]
    });
    let (_, body) = send(disconnected_app(), post_json("/api/pitch", pitch)).await;
    let text = body["body"].as_str().unwrap();
    assert!(text.starts_with("Hoi Eva,"));
    assert!(text.contains(" bij Acme"));
    assert!(text.contains("facturen, mail"));
}

#[tokio::test]
async fn workflow_create_then_list() {
    let store = memory_store();
    let app = app_with(store.clone());

    let workflow = json!({
        "company_name": "Acme",
        "category": "marketing",
        "title": "Social posts",
        "description": "Wekelijks plannen"
    });
    let (status, created) = send(app.clone(), post_json("/api/workflows", workflow)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "ok");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, list) = send(app, get("/api/workflows")).await;
    assert_eq!(status, StatusCode::OK);
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["status"], "gepland");
    assert_eq!(items[0]["title"], "Social posts");
}

#[tokio::test]
async fn workflow_create_surfaces_store_outage() {
    let workflow = json!({
        "company_name": "Acme",
        "category": "hr",
        "title": "Vacature screening",
        "description": "CV's scoren"
    });
    let (status, body) = send(disconnected_app(), post_json("/api/workflows", workflow)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("Database not available"));
}

#[tokio::test]
async fn workflow_create_rejects_unknown_category() {
    let store = memory_store();
    let workflow = json!({
        "company_name": "Acme",
        "category": "sales",
        "title": "t",
        "description": "d"
    });
    let (status, _) = send(app_with(store.clone()), post_json("/api/workflows", workflow)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.count("workflow").await, 0);
}

#[tokio::test]
async fn workflow_list_falls_back_to_samples() {
    let (status, body) = send(disconnected_app(), get("/api/workflows")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"],
        json!([
            {"id": "1", "category": "marketing", "title": "Social posts", "status": "actief"},
            {"id": "2", "category": "klantenservice", "title": "FAQ chatbot", "status": "gepland"}
        ])
    );
}

#[tokio::test]
async fn use_cases_are_static_when_store_is_down() {
    let (status, body) = send(disconnected_app(), get("/api/use-cases")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["title"], "Social media calendar");
    assert_eq!(items[3]["category"], "hr");
}

#[tokio::test]
async fn use_cases_append_stored_workflows() {
    let temp_dir = TempDir::new().unwrap();
    let store = StoreFactory::from_config(&StoreConfig::file(temp_dir.path(), "flomote"))
        .await
        .unwrap();
    let app = app_with(store);

    let workflow = json!({
        "company_name": "Acme",
        "category": "financien",
        "title": "Factuurverwerking",
        "description": "OCR + boeking",
        "status": "actief"
    });
    let (status, _) = send(app.clone(), post_json("/api/workflows", workflow)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app, get("/api/use-cases")).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(
        items[4],
        json!({"category": "financien", "title": "Factuurverwerking", "description": "OCR + boeking"})
    );
}

#[tokio::test]
async fn cors_allows_any_origin_with_credentials() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/quickscan")
        .header(header::ORIGIN, "https://flomote.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = disconnected_app().oneshot(req).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://flomote.example"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
