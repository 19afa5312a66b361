//! Stateless bearer-token authentication.
//!
//! - [`JwtAuth`] signs and verifies HS256 tokens carrying a user id and role
//! - [`jwt_auth_middleware`] guards routes and inserts a [`Principal`]
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/messages/{id}", post(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{AuthError, JwtAuth, JwtClaims};
pub use middleware::{Principal, jwt_auth_middleware};
