use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::UploadResult;

/// Where uploaded bytes end up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes `data` under `name`. Fails rather than overwrite an existing file.
    async fn save(&self, name: &str, data: &[u8]) -> UploadResult<()>;
}

/// Local filesystem storage rooted at the upload directory
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!(dir = %self.root.display(), "Upload directory ready");
        Ok(())
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, name: &str, data: &[u8]) -> UploadResult<()> {
        let path = self.root.join(name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        file.write_all(data).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Stored upload");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_writes_bytes() {
        let temp = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(temp.path());

        storage.save("a.txt", b"hello").await.unwrap();
        assert_eq!(std::fs::read(temp.path().join("a.txt")).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_save_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(temp.path());

        storage.save("a.txt", b"first").await.unwrap();
        let result = storage.save("a.txt", b"second").await;

        assert!(matches!(result, Err(UploadError::Storage(_))));
        assert_eq!(std::fs::read(temp.path().join("a.txt")).unwrap(), b"first");
    }

    #[tokio::test]
    async fn test_ensure_root_creates_nested_dir() {
        let temp = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(temp.path().join("nested/uploads"));

        storage.ensure_root().await.unwrap();
        storage.ensure_root().await.unwrap();
        assert!(storage.root().is_dir());
    }
}
