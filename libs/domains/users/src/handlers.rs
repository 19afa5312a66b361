//! HTTP handlers for the account endpoints

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    MessageResponse, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserType};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the account endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login, logout),
    components(
        schemas(RegisterRequest, LoginRequest, LoginResponse, UserType, MessageResponse),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "Registration, login and logout")
    )
)]
pub struct ApiDoc;

/// Create the users router
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>))
        .route("/logout", post(logout::<R>))
        .with_state(Arc::new(service))
}

/// Register a buyer or seller account
#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Exchange email and password for a session token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    let response = service.login(input).await?;
    Ok(Json(response))
}

/// Log out. Tokens are not tracked server-side, so this always succeeds.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Users",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
async fn logout<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(service.logout()))
}
