//! File storage seam for milestone attachments.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Durable byte storage for uploaded attachment files.
///
/// `save` must return only once the bytes are durably stored; the
/// attachment reference is appended to the milestone only afterwards.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn save(&self, name: &str, bytes: &[u8]) -> std::io::Result<()>;
}

/// Flat on-disk file store rooted at the upload directory.
///
/// Names are stored as-is (callers sanitize first); a second upload with
/// the same name overwrites the first.
#[derive(Debug, Clone)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let mut file = tokio::fs::File::create(self.root.join(name)).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        Ok(())
    }
}

/// In-memory file store for tests.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.read().await.get(name).cloned()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> std::io::Result<()> {
        self.files
            .write()
            .await
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}
