//! Durable registration storage with atomic document replacement.

use crate::error::StoreError;
use crate::types::{Registration, RegistrationDraft};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

struct StoreInner {
    path: PathBuf,
    records: RwLock<Vec<Registration>>,
}

/// Durable holder of the canonical registration sequence.
///
/// Appends are serialized: a single writer holds the lock for the whole
/// read-modify-commit section. Readers take complete snapshots concurrently.
/// The document on disk is replaced atomically, so a failed write leaves the
/// previous commit intact.
#[derive(Clone)]
pub struct RegistrationStore {
    inner: Arc<StoreInner>,
}

impl RegistrationStore {
    /// Open a store backed by the given document path.
    ///
    /// A missing or blank document is the valid empty state; a document that
    /// exists but cannot be parsed is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = read_document(&path).await?;

        info!(count = records.len(), path = %path.display(), "Opened registration store");

        Ok(Self {
            inner: Arc::new(StoreInner {
                path,
                records: RwLock::new(records),
            }),
        })
    }

    /// Point-in-time snapshot of every committed registration, in commit order.
    pub async fn load(&self) -> Vec<Registration> {
        self.inner.records.read().await.clone()
    }

    /// Number of committed registrations.
    pub async fn count(&self) -> usize {
        self.inner.records.read().await.len()
    }

    /// Finalize a draft and append it to the end of the canonical sequence.
    ///
    /// The id and commit timestamp are assigned under the write lock so they
    /// reflect actual commit order. On persist failure the in-memory state is
    /// rolled back and nothing is committed.
    #[instrument(skip(self, draft))]
    pub async fn append(&self, draft: RegistrationDraft) -> Result<Registration, StoreError> {
        let mut records = self.inner.records.write().await;

        let entry = draft.finalize();
        records.push(entry.clone());

        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }

        debug!(id = %entry.id, total = records.len(), "Appended registration");
        Ok(entry)
    }

    /// Write the full document to a side file and rename it over the
    /// canonical path.
    async fn persist(&self, records: &[Registration]) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = self.inner.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.inner.path.with_extension("tmp");
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.inner.path).await?;

        Ok(())
    }
}

async fn read_document(path: &Path) -> Result<Vec<Registration>, StoreError> {
    if !path.exists() {
        info!(path = %path.display(), "Registration document not found, starting empty");
        return Ok(Vec::new());
    }

    let data = fs::read(path).await?;
    if data.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_slice(&data)?)
}
