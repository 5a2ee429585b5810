//! Document store gateway
//!
//! Named collections of JSON documents behind the [`DocumentStore`] trait.
//! The backend is chosen from the `DATABASE_URL` connection string and the
//! handle is passed to callers explicitly as a [`SharedStore`].
//!
//! Every call is fire-once: no retries, no transactions. Callers decide per
//! call site whether a failure is surfaced or swallowed; see [`BestEffort`].

pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod traits;
pub mod types;


pub use config::{BackendType, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use factory::{SharedStore, StoreFactory};
pub use traits::DocumentStore;
pub use types::{document_id, Document, DocumentFilter, StoreHealth, ID_FIELD};

use serde::Serialize;
use tracing::{debug, warn};

/// Serialize `payload` into `collection` and return the generated id
pub async fn create_document<T: Serialize + ?Sized>(
    store: &dyn DocumentStore,
    collection: &str,
    payload: &T,
) -> StoreResult<String> {
    types::validate_collection(collection)?;
    let (id, document) = types::new_document(payload)?;
    store.insert(collection, document).await?;
    debug!(collection, id = %id, "Document created");
    Ok(id)
}

/// Fetch up to `limit` documents of `collection` matching `filter`
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: &str,
    filter: &DocumentFilter,
    limit: usize,
) -> StoreResult<Vec<Document>> {
    types::validate_collection(collection)?;
    store.find(collection, filter, limit).await
}

/// Explicitly discard a store failure after logging it
///
/// Used where persistence is a side effect the response does not depend on.
pub trait BestEffort<T> {
    /// Keep the value, or log the error against `collection` and drop it
    fn best_effort(self, collection: &str) -> Option<T>;
}

impl<T> BestEffort<T> for StoreResult<T> {
    fn best_effort(self, collection: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(collection, error = %e, "DB insert error");
                None
            }
        }
    }
}
