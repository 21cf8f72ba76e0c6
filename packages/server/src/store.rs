use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

use common::id;

use crate::models::product::ProductRecord;

/// Errors from the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted document could not be parsed. Surfaced to the caller,
    /// never papered over with an empty document.
    #[error("corrupt record document at {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize record document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// The single persisted document: product id to record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordDocument {
    products: BTreeMap<String, ProductRecord>,
}

/// Durable mapping from product id to [`ProductRecord`], backed by one JSON
/// document on disk.
///
/// `put` is read-modify-write over the whole document, serialized by an
/// internal mutex so two concurrent submissions cannot lose an update. The
/// document is persisted via temp-file + rename.
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Open the store, validating any existing document.
    ///
    /// A document that exists but does not parse is a fatal error: starting
    /// over from an empty map would silently discard every record.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };
        store.load().await?;
        Ok(store)
    }

    /// Insert or overwrite the record for `record.id`.
    pub async fn put(&self, record: &ProductRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load().await?;
        doc.products.insert(record.id.clone(), record.clone());
        self.persist(&doc).await
    }

    /// Point lookup. Unknown ids are `Ok(None)`, not an error.
    pub async fn get(&self, id: &str) -> Result<Option<ProductRecord>, StoreError> {
        let mut doc = self.load().await?;
        Ok(doc.products.remove(id))
    }

    async fn load(&self) -> Result<RecordDocument, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecordDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    async fn persist(&self, doc: &RecordDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;

        let temp_path = self.path.with_extension(format!("tmp.{}", id::new_id()));
        if let Err(e) = fs::write(&temp_path, json).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }
}
