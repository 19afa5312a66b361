//! # Axum Helpers
//!
//! Cross-cutting pieces shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: HS256 session tokens and the bearer-token middleware
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Validated JSON bodies and path, query and multipart
//!   extractors with JSON rejections

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod message;
pub mod server;

pub use auth::{AuthError, JwtAuth, JwtClaims, JwtConfig, Principal, jwt_auth_middleware};

pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{MultipartForm, PathParam, QueryParams, ValidatedJson, not_blank};

pub use message::MessageResponse;
