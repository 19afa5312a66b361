use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Account kind chosen at registration. Carried in the session token as
/// the caller's role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserType {
    Buyer,
    Seller,
}

impl TryFrom<String> for UserType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Stored account. Never serialized into an HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", with = "database::mongodb::uuid_string")]
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    /// Trimmed and lowercased; unique across accounts
    pub email: String,
    /// Argon2id PHC string
    #[serde(rename = "password")]
    pub password_hash: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        password_hash: String,
        user_type: UserType,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            password_hash,
            user_type,
            created_at: Utc::now(),
        }
    }
}

/// `POST /register` body. Missing fields deserialize as empty strings so
/// that they fail validation with a single message.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    pub firstname: String,
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    pub lastname: String,
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
    /// `buyer` or `seller`
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    #[schema(example = "buyer")]
    pub user_type: String,
}

/// `POST /login` body. Blank fields are reported as invalid credentials,
/// not as a validation error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// HS256 session token; send as `Authorization: Bearer <token>`
    pub token: String,
    pub user_type: UserType,
}

/// Lowercases and trims an address so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
