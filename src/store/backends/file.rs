//! File-based document store backend
//!
//! Layout: `<base_dir>/<database>/<collection>/<created>_<id>.json`, one
//! pretty-printed JSON object per file. `<created>` is the compact creation
//! timestamp, so file names sort in insertion order.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::store::{
    error::{StoreError, StoreResult},
    traits::DocumentStore,
    types::{document_id, Document, DocumentFilter, CREATED_AT_FIELD},
};

/// File-based backend
pub struct FileBackend {
    database: String,
    root: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) the database directory under `base_dir`
    pub async fn new(base_dir: impl AsRef<Path>, database: impl Into<String>) -> StoreResult<Self> {
        let database = database.into();
        let root = base_dir.as_ref().join(&database);

        fs::create_dir_all(&root).await.map_err(|e| {
            StoreError::unavailable(format!(
                "Cannot open database directory {}: {e}",
                root.display()
            ))
        })?;

        debug!("File store opened at {}", root.display());
        Ok(Self { database, root })
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    async fn read_document(&self, path: &Path) -> StoreResult<Document> {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(StoreError::serialization)
    }

    async fn write_document(&self, path: &Path, document: &Document) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(document)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

/// File stem that sorts by creation time, then id
fn file_stem(document: &Document) -> StoreResult<String> {
    let id = document_id(document)
        .ok_or_else(|| StoreError::serialization("document has no _id"))?;
    let created = document
        .get(CREATED_AT_FIELD)
        .and_then(|v| v.as_str())
        .map(|ts| ts.replace(['-', ':'], ""));

    Ok(match created {
        Some(created) => format!("{created}_{id}"),
        None => id,
    })
}

/// Insertion order: creation timestamp, then id
fn insertion_order(a: &Document, b: &Document) -> Ordering {
    let created = |doc: &Document| {
        doc.get(CREATED_AT_FIELD)
            .and_then(|v| v.as_str())
            .map(str::to_owned)
    };
    created(a)
        .cmp(&created(b))
        .then_with(|| document_id(a).cmp(&document_id(b)))
}

#[async_trait]
impl DocumentStore for FileBackend {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()> {
        let stem = file_stem(&document)?;
        let path = self.collection_dir(collection).join(format!("{stem}.json"));
        self.write_document(&path, &document).await
    }

    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> StoreResult<Vec<Document>> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            return Ok(vec![]);
        }

        let mut paths = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        // Only read as many files as the limit needs
        let mut documents = Vec::new();
        for path in paths {
            if documents.len() >= limit {
                break;
            }
            match self.read_document(&path).await {
                Ok(doc) if filter.matches(&doc) => documents.push(doc),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable document {}: {}", path.display(), e),
            }
        }

        documents.sort_by(insertion_order);
        Ok(documents)
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }

        Ok(names)
    }
}
