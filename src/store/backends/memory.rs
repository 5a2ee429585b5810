//! In-memory document store backend

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::store::{
    error::StoreResult,
    traits::DocumentStore,
    types::{Document, DocumentFilter},
};

/// In-memory backend; collections keep insertion order
pub struct MemoryBackend {
    database: String,
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryBackend {
    /// Create a new, empty memory backend
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(vec![]);
        };

        Ok(documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .collections
            .read()
            .await
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
