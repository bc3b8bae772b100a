//! services/api/src/adapters/store.rs
//!
//! This module contains the storage adapter, which is the concrete
//! implementation of the `KeyValueStore` port from the `core` crate. It
//! keeps one file per key under the configured data directory, matching the
//! medium's contract: opaque string values, no transactions, last write wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use semey_guide_core::ports::{KeyValueStore, PortError, PortResult};

/// A file-backed adapter that implements the `KeyValueStore` port.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the backing directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PortResult<PathBuf> {
        // Keys are flat names; anything path-like would escape the root.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(PortError::Unexpected(format!("Invalid storage key {:?}", key)));
        }
        Ok(self.root.join(key))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortError::Unexpected(format!(
                "Reading {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> PortResult<()> {
        let path = self.path_for(key)?;
        tokio::fs::write(&path, value).await.map_err(|e| {
            PortError::Unexpected(format!("Writing {}: {}", path.display(), e))
        })
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortError::Unexpected(format!(
                "Removing {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
