//! Upload API routes

use axum::Router;
use domain_uploads::{LocalFileStorage, UploadService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let storage = LocalFileStorage::new(&state.config.uploads.dir);
    handlers::router(UploadService::new(storage), &state.config.uploads)
}

pub async fn ensure_upload_dir(state: &AppState) -> std::io::Result<()> {
    LocalFileStorage::new(&state.config.uploads.dir)
        .ensure_root()
        .await
}
