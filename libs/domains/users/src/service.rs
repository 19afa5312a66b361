use axum_helpers::{JwtAuth, errors::validation_message};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, User, UserType, normalize_email};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

/// Service layer for account registration and login
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    auth: JwtAuth,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, auth: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            auth,
        }
    }

    /// Create an account. The password is stored only as an Argon2 hash.
    #[instrument(skip_all)]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(validation_message(&e)))?;

        let user_type: UserType = input.user_type.parse().map_err(|_| {
            UserError::Validation("userType must be either 'buyer' or 'seller'".to_string())
        })?;

        let email = normalize_email(&input.email);
        if self.repository.email_exists(&email).await? {
            return Err(UserError::DuplicateEmail(email));
        }

        let password_hash = hash_password(&input.password)?;
        let user = User::new(
            input.firstname.trim(),
            input.lastname.trim(),
            email,
            password_hash,
            user_type,
        );

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, user_type = %created.user_type, "User registered");
        Ok(created)
    }

    /// Check credentials and issue a session token.
    ///
    /// Unknown email and wrong password fail identically.
    #[instrument(skip_all)]
    pub async fn login(&self, input: LoginRequest) -> UserResult<LoginResponse> {
        let email = normalize_email(&input.email);
        if email.is_empty() || input.password.is_empty() {
            return Err(UserError::InvalidCredentials);
        }

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .auth
            .issue(&user.id.to_string(), &user.user_type.to_string())
            .map_err(|e| UserError::Token(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse {
            token,
            user_type: user.user_type,
        })
    }

    /// Tokens are stateless; logging out is the client discarding its copy.
    pub fn logout(&self) -> &'static str {
        "Logged out successfully"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};
    use axum_helpers::JwtConfig;

    const SECRET: &str = "users-service-test-secret-0123456789";

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET))
    }

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(InMemoryUserRepository::new(), auth())
    }

    fn register_request(email: &str, user_type: &str) -> RegisterRequest {
        RegisterRequest {
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: email.to_string(),
            password: "s3cret-pass".to_string(),
            user_type: user_type.to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_normalizes_email() {
        let service = service();
        let user = service
            .register(register_request("  Jane@Example.com ", "Seller"))
            .await
            .unwrap();

        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.user_type, UserType::Seller);
        assert_ne!(user.password_hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_missing_field() {
        let mut req = register_request("jane@example.com", "buyer");
        req.lastname = String::new();

        match service().register(req).await {
            Err(UserError::Validation(msg)) => assert_eq!(msg, "All fields are required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_unknown_user_type() {
        let result = service()
            .register(register_request("jane@example.com", "admin"))
            .await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_case_insensitive() {
        let service = service();
        service
            .register(register_request("jane@example.com", "buyer"))
            .await
            .unwrap();

        let result = service
            .register(register_request("JANE@example.com", "seller"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_login_issues_token_with_role() {
        let service = service();
        let user = service
            .register(register_request("jane@example.com", "seller"))
            .await
            .unwrap();

        let response = service
            .login(login_request("JANE@example.com", "s3cret-pass"))
            .await
            .unwrap();
        assert_eq!(response.user_type, UserType::Seller);

        let claims = auth().verify(&response.token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "seller");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = service();
        service
            .register(register_request("jane@example.com", "buyer"))
            .await
            .unwrap();

        for req in [
            login_request("jane@example.com", "wrong"),
            login_request("nobody@example.com", "s3cret-pass"),
            login_request("", ""),
        ] {
            let err = service.login(req).await.unwrap_err();
            assert!(matches!(err, UserError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn test_login_propagates_repository_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(UserError::Database("connection reset".to_string())));

        let service = UserService::new(repo, auth());
        let result = service.login(login_request("jane@example.com", "pw")).await;
        assert!(matches!(result, Err(UserError::Database(_))));
    }

    #[tokio::test]
    async fn test_register_does_not_insert_when_email_taken() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_exists().returning(|_| Ok(true));
        repo.expect_create().never();

        let service = UserService::new(repo, auth());
        let result = service
            .register(register_request("jane@example.com", "buyer"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[test]
    fn test_logout_message() {
        assert_eq!(service().logout(), "Logged out successfully");
    }
}
