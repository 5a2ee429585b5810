//! Liveness and store diagnostics
//!
//! Neither endpoint fails: store trouble shows up as status strings.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ApiState;
use crate::store::StoreHealth;

/// Longest store error excerpt shown by diagnostics
const ERROR_EXCERPT_CHARS: usize = 50;

/// Reported when the service runs without a store
pub const STORE_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";

/// Which store environment variables were present at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvStatus {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootMessage {
    pub message: String,
}

/// Body of `GET /test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_flag(set: bool) -> String {
    let flag = if set { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

/// Turn a store health snapshot into the diagnostic report
pub fn diagnose(health: &StoreHealth, env: EnvStatus) -> Diagnostics {
    let (database, connection_status, collections) = if !health.configured {
        (STORE_NOT_INITIALIZED.to_string(), "Not Connected", Vec::new())
    } else if health.reachable {
        (
            "✅ Connected & Working".to_string(),
            "Connected",
            health.collections.clone(),
        )
    } else {
        let excerpt: String = health
            .error
            .as_deref()
            .unwrap_or("unknown error")
            .chars()
            .take(ERROR_EXCERPT_CHARS)
            .collect();
        (
            format!("⚠️  Connected but Error: {excerpt}"),
            "Connected",
            Vec::new(),
        )
    };

    Diagnostics {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_flag(env.database_url_set),
        database_name: set_flag(env.database_name_set),
        connection_status: connection_status.to_string(),
        collections,
    }
}

pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Flomote Backend running".to_string(),
    })
}

pub async fn test_database(State(state): State<Arc<ApiState>>) -> Json<Diagnostics> {
    let health = state.store.health().await;
    Json(diagnose(&health, state.env))
}
