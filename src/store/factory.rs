//! Store factory for creating backend instances

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::backends::{DisconnectedBackend, FileBackend, MemoryBackend};
use super::config::{BackendType, StoreConfig};
use super::error::{StoreError, StoreResult};
use super::traits::DocumentStore;

/// Shared handle to a document store
pub type SharedStore = Arc<dyn DocumentStore>;

/// Factory for creating store instances
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store from environment configuration
    pub async fn from_env() -> StoreResult<SharedStore> {
        let config = StoreConfig::from_env()?;
        Self::from_config(&config).await
    }

    /// Create a store from explicit configuration
    pub async fn from_config(config: &StoreConfig) -> StoreResult<SharedStore> {
        let store: SharedStore = match &config.backend {
            BackendType::File => {
                let base_dir: &PathBuf = config.base_dir.as_ref().ok_or_else(|| {
                    StoreError::configuration("File backend requires a base directory")
                })?;
                Arc::new(FileBackend::new(base_dir, config.database_name.clone()).await?)
            }
            BackendType::Memory => Arc::new(MemoryBackend::new(config.database_name.clone())),
            BackendType::Disconnected => Arc::new(DisconnectedBackend),
        };

        info!(
            backend = store.backend_name(),
            database = %config.database_name,
            "Document store ready"
        );
        Ok(store)
    }
}
