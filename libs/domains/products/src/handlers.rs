//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    JwtAuth, MessageResponse, PathParam, Principal, QueryParams, ValidatedJson,
    jwt_auth_middleware,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    Comment, CreateProduct, Message, NewComment, NewMessage, NewReview, Product, Review,
    SearchParams,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        add_comment,
        list_comments,
        send_message,
        list_messages,
        add_review,
        list_reviews,
    ),
    components(
        schemas(
            Product, CreateProduct, Comment, Message, Review,
            NewComment, NewMessage, NewReview, MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product listings"),
        (name = "Feedback", description = "Comments, messages and reviews on a product")
    )
)]
pub struct ApiDoc;

/// Create the products router.
///
/// `POST /messages/{product_id}` requires a bearer token verified by `auth`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>, auth: JwtAuth) -> Router {
    let shared_service = Arc::new(service);

    let send_message_route = post(send_message::<R>).route_layer(middleware::from_fn_with_state(
        auth,
        jwt_auth_middleware,
    ));

    Router::new()
        .route(
            "/products",
            get(list_products::<R>).post(create_product::<R>),
        )
        .route("/products/search", get(search_products::<R>))
        .route(
            "/comments/{product_id}",
            get(list_comments::<R>).post(add_comment::<R>),
        )
        .route(
            "/messages/{product_id}",
            get(list_messages::<R>).merge(send_message_route),
        )
        .route(
            "/reviews/{product_id}",
            get(list_reviews::<R>).post(add_review::<R>),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products in creation order", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Search products by title or description
#[utoipa::path(
    get,
    path = "/products/search",
    tag = "Products",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(params): QueryParams<SearchParams>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_products(params.query.as_deref()).await?;
    Ok(Json(products))
}

/// Comment on a product
#[utoipa::path(
    post,
    path = "/comments/{product_id}",
    tag = "Feedback",
    params(("product_id" = String, Path, description = "Product id")),
    request_body = NewComment,
    responses(
        (status = 201, description = "Comment added", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_comment<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(product_id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<NewComment>,
) -> ProductResult<impl IntoResponse> {
    service.add_comment(&product_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Comment added successfully")),
    ))
}

/// List a product's comments
#[utoipa::path(
    get,
    path = "/comments/{product_id}",
    tag = "Feedback",
    params(("product_id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Comments in the order they were added", body = Vec<Comment>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_comments<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(product_id): PathParam<String>,
) -> ProductResult<Json<Vec<Comment>>> {
    Ok(Json(service.list_comments(&product_id).await?))
}

/// Message the seller (or buyer) about a product
#[utoipa::path(
    post,
    path = "/messages/{product_id}",
    tag = "Feedback",
    params(("product_id" = String, Path, description = "Product id")),
    request_body = NewMessage,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Message sent", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn send_message<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    principal: Principal,
    PathParam(product_id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<NewMessage>,
) -> ProductResult<impl IntoResponse> {
    service
        .add_message(&product_id, &principal.role, input)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Message sent successfully")),
    ))
}

/// List a product's messages
#[utoipa::path(
    get,
    path = "/messages/{product_id}",
    tag = "Feedback",
    params(("product_id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Messages in the order they were sent", body = Vec<Message>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_messages<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(product_id): PathParam<String>,
) -> ProductResult<Json<Vec<Message>>> {
    Ok(Json(service.list_messages(&product_id).await?))
}

/// Review a product
#[utoipa::path(
    post,
    path = "/reviews/{product_id}",
    tag = "Feedback",
    params(("product_id" = String, Path, description = "Product id")),
    request_body = NewReview,
    responses(
        (status = 201, description = "Review added", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_review<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(product_id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<NewReview>,
) -> ProductResult<impl IntoResponse> {
    service.add_review(&product_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review added successfully")),
    ))
}

/// List a product's reviews
#[utoipa::path(
    get,
    path = "/reviews/{product_id}",
    tag = "Feedback",
    params(("product_id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Reviews in the order they were added", body = Vec<Review>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_reviews<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(product_id): PathParam<String>,
) -> ProductResult<Json<Vec<Review>>> {
    Ok(Json(service.list_reviews(&product_id).await?))
}
