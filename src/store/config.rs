//! Store configuration parsed from the connection string

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use super::error::StoreResult;

/// Environment variable holding the connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable holding the database name
pub const DATABASE_NAME_ENV: &str = "DATABASE_NAME";

/// Database used when `DATABASE_NAME` is unset
pub const DEFAULT_DATABASE_NAME: &str = "flomote";

/// Store backend type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// JSON files on disk
    File,
    /// Process memory (demos and tests)
    Memory,
    /// No connection string configured
    Disconnected,
}

impl Default for BackendType {
    fn default() -> Self {
        Self::Disconnected
    }
}

/// Main store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub backend: BackendType,

    pub database_name: String,

    /// Root directory for the file backend
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl StoreConfig {
    /// Configuration with no backend
    pub fn disconnected() -> Self {
        Self {
            backend: BackendType::Disconnected,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            base_dir: None,
        }
    }

    /// In-memory backend
    pub fn memory(database_name: impl Into<String>) -> Self {
        Self {
            backend: BackendType::Memory,
            database_name: database_name.into(),
            base_dir: None,
        }
    }

    /// File backend rooted at `base_dir`
    pub fn file(base_dir: impl Into<PathBuf>, database_name: impl Into<String>) -> Self {
        Self {
            backend: BackendType::File,
            database_name: database_name.into(),
            base_dir: Some(base_dir.into()),
        }
    }

    /// Parse a connection string and database name
    ///
    /// Accepted forms: `memory://`, `file:///path`, `file://` (platform data
    /// directory) or a bare filesystem path. A missing or blank URL, or one
    /// with a scheme no backend serves (such as `mongodb://`), yields a
    /// disconnected store so the service still starts.
    pub fn from_connection(url: Option<&str>, database_name: Option<&str>) -> StoreResult<Self> {
        let database_name = database_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_DATABASE_NAME)
            .to_string();

        let url = match url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => {
                return Ok(Self {
                    database_name,
                    ..Self::disconnected()
                })
            }
        };

        if url == "memory" || url.starts_with("memory://") {
            return Ok(Self::memory(database_name));
        }

        if let Some(path) = url.strip_prefix("file://") {
            let base_dir = if path.is_empty() {
                default_data_dir()
            } else {
                PathBuf::from(path)
            };
            return Ok(Self::file(base_dir, database_name));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            warn!(
                scheme,
                "Unsupported {DATABASE_URL_ENV} scheme (expected file:// or memory://), running without a store"
            );
            return Ok(Self {
                database_name,
                ..Self::disconnected()
            });
        }

        Ok(Self::file(PathBuf::from(url), database_name))
    }

    /// Create configuration from `DATABASE_URL` and `DATABASE_NAME`
    pub fn from_env() -> StoreResult<Self> {
        let url = std::env::var(DATABASE_URL_ENV).ok();
        let name = std::env::var(DATABASE_NAME_ENV).ok();
        Self::from_connection(url.as_deref(), name.as_deref())
    }
}

/// Default root for the file backend when `file://` carries no path
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("flomote"))
        .unwrap_or_else(|| PathBuf::from(".flomote"))
}
