use super::config::JwtConfig;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a session token.
///
/// Tokens do not expire; there is no server-side session to revoke them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User id
    pub sub: String,
    /// Role at the time of login, e.g. `buyer` or `seller`
    pub role: String,
    /// Issued at (unix seconds)
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies HS256 session tokens.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        tracing::info!("JWT auth initialized (HS256, non-expiring tokens)");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Signs a token for `user_id` acting as `role`.
    pub fn issue(&self, user_id: &str, role: &str) -> Result<String, AuthError> {
        let claims = JwtClaims {
            sub: user_id.to_string(),
            role: role.to_string(),
            iat: Utc::now().timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Checks the signature and returns the embedded claims.
    pub fn verify(&self, token: &str) -> Result<JwtClaims, AuthError> {
        let data = decode::<JwtClaims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}
