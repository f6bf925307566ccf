//! Static asset collaborator.
//!
//! The gateway serves exactly one document, at the root path. The store only
//! knows how to read named documents from a directory; everything else about
//! storage is outside the gateway's contract.

use std::path::PathBuf;

use axum::body::Bytes;
use thiserror::Error;

use crate::config::StaticAssetConfig;

/// Error type for document reads.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read document: {0}")]
    Read(#[from] std::io::Error),
}

/// Filesystem-backed document store.
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(config: StaticAssetConfig) -> Self {
        Self {
            root: PathBuf::from(config.root),
        }
    }

    /// Read a document from the asset root.
    pub async fn fetch_document(&self, name: &str) -> Result<Bytes, AssetError> {
        let bytes = tokio::fs::read(self.root.join(name)).await?;
        Ok(Bytes::from(bytes))
    }
}
