//! Backend used when no connection string is configured

use async_trait::async_trait;

use crate::store::{
    error::{StoreError, StoreResult},
    traits::DocumentStore,
    types::{Document, DocumentFilter, StoreHealth},
};

/// Message returned by every operation on a disconnected store
pub const NOT_AVAILABLE: &str =
    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.";

/// Store that rejects every read and write as unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedBackend;

#[async_trait]
impl DocumentStore for DisconnectedBackend {
    fn backend_name(&self) -> &'static str {
        "disconnected"
    }

    fn database_name(&self) -> &str {
        ""
    }

    async fn insert(&self, _collection: &str, _document: Document) -> StoreResult<()> {
        Err(StoreError::unavailable(NOT_AVAILABLE))
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &DocumentFilter,
        _limit: usize,
    ) -> StoreResult<Vec<Document>> {
        Err(StoreError::unavailable(NOT_AVAILABLE))
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::unavailable(NOT_AVAILABLE))
    }

    async fn health(&self) -> StoreHealth {
        StoreHealth::not_configured(self.backend_name())
    }
}
