use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
