//! Core trait definition for document store backends

use async_trait::async_trait;

use super::error::StoreResult;
use super::types::{Document, DocumentFilter, StoreHealth};

/// A document database holding named collections of JSON documents
///
/// Backends only move prepared documents in and out; id generation,
/// timestamps and collection-name checks live in [`super::create_document`]
/// and [`super::get_documents`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend identifier ("file", "memory", ...)
    fn backend_name(&self) -> &'static str;

    /// Database the backend is bound to
    fn database_name(&self) -> &str;

    /// Insert a prepared document into a collection
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()>;

    /// Return up to `limit` documents of a collection matching `filter`
    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> StoreResult<Vec<Document>>;

    /// Names of all collections holding at least one document
    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Report reachability without failing
    async fn health(&self) -> StoreHealth {
        match self.list_collections().await {
            Ok(collections) => {
                StoreHealth::reachable(self.backend_name(), self.database_name(), collections)
            }
            Err(e) => StoreHealth::degraded(self.backend_name(), self.database_name(), &e),
        }
    }
}
