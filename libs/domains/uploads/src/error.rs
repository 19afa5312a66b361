use axum::extract::multipart::MultipartError;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Only one file may be uploaded per request")]
    MultipleFiles,

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type UploadResult<T> = Result<T, UploadError>;

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::MissingFile | UploadError::MultipleFiles => {
                AppError::BadRequest(err.to_string())
            }
            UploadError::Multipart(e) => AppError::Multipart(e),
            UploadError::Storage(e) => AppError::Io(e),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
