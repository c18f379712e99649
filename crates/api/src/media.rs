//! Media storage backend.
//!
//! Uploads are validated in `parish_core::media` before any byte reaches a
//! store. The store itself is behind a trait so the local-filesystem backend
//! shipped here can be replaced by an object-storage backend without touching
//! the handlers.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

/// Result of a successful store call: a stable public URL plus an opaque
/// asset identifier.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub asset_id: Uuid,
    pub url: String,
}

/// Errors a media store can produce.
#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A destination for validated uploads.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `bytes` under `folder`, naming the object after a freshly
    /// generated asset id with the given extension.
    async fn store(
        &self,
        folder: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStoreError>;
}

/// Local-filesystem media store serving files from a public base URL.
pub struct LocalMediaStore {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { root, base_url }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(
        &self,
        folder: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStoreError> {
        let asset_id = Uuid::new_v4();
        let file_name = format!("{asset_id}.{extension}");

        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(StoredMedia {
            asset_id,
            url: format!("{}/{folder}/{file_name}", self.base_url),
        })
    }
}
