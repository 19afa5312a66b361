use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateEmail(_) => AppError::BadRequest("User already exists".to_string()),
            UserError::InvalidCredentials => AppError::BadRequest("Invalid credentials".to_string()),
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::PasswordHash(msg) => {
                AppError::InternalServerError(format!("password hashing: {}", msg))
            }
            UserError::Token(msg) => AppError::InternalServerError(format!("token signing: {}", msg)),
            UserError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_client_errors_are_bad_requests() {
        for err in [
            UserError::DuplicateEmail("a@b.c".to_string()),
            UserError::InvalidCredentials,
            UserError::Validation("All fields are required".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_duplicate_email_does_not_echo_address() {
        let app_err = AppError::from(UserError::DuplicateEmail("taken@example.com".to_string()));
        match app_err {
            AppError::BadRequest(msg) => assert_eq!(msg, "User already exists"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_internal_failures_are_500() {
        for err in [
            UserError::PasswordHash("bad salt".to_string()),
            UserError::Token("bad key".to_string()),
            UserError::Database("connection reset".to_string()),
        ] {
            assert_eq!(
                err.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
