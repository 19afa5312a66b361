use std::sync::Arc;
use tracing::instrument;

use crate::error::{UploadError, UploadResult};
use crate::naming::stored_name;
use crate::storage::FileStorage;

/// Service layer for file uploads
#[derive(Clone)]
pub struct UploadService<S: FileStorage> {
    storage: Arc<S>,
}

impl<S: FileStorage> UploadService<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Stores `data` under a generated name and returns that name.
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn store(&self, original_name: Option<&str>, data: &[u8]) -> UploadResult<String> {
        if data.is_empty() {
            return Err(UploadError::MissingFile);
        }

        let name = stored_name(original_name);
        self.storage.save(&name, data).await?;

        tracing::info!(file = %name, "File uploaded");
        Ok(name)
    }
}
