use axum::{http::Uri, response::IntoResponse};

use super::AppError;

/// Router fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
