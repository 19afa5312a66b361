use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_products::{InMemoryProductRepository, ProductService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "products-handler-test-secret-012345";

fn auth() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new(SECRET))
}

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()), auth())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn create_product(app: &Router) -> String {
    let (status, body) = send(
        app,
        post(
            "/products",
            json!({
                "title": "Rattan basket",
                "description": "Hand-woven in Cebu",
                "file": "basket.jpg",
                "sellerName": "Ana"
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_then_list_products() {
    let app = app();
    let id = create_product(&app).await;

    let (status, body) = send(&app, get("/products")).await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["_id"], id);
    assert_eq!(products[0]["sellerName"], "Ana");
    assert_eq!(products[0]["comments"], json!([]));
    assert_eq!(products[0]["messages"], json!([]));
    assert_eq!(products[0]["reviews"], json!([]));
}

#[tokio::test]
async fn test_create_product_missing_field_is_400() {
    let (status, body) = send(&app(), post("/products", json!({"title": "Basket"}), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_search_by_description_and_blank_query() {
    let app = app();
    create_product(&app).await;

    let (status, body) = send(&app, get("/products/search?query=CEBU")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, get("/products/search?query=.*")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = send(&app, get("/products/search?query=%20%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/products/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_append_and_list() {
    let app = app();
    let id = create_product(&app).await;

    for text in ["first", "second"] {
        let (status, body) = send(
            &app,
            post(&format!("/comments/{id}"), json!({"text": text}), None),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Comment added successfully");
    }

    let (status, body) = send(&app, get(&format!("/comments/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["first", "second"]);
}

#[tokio::test]
async fn test_comment_on_missing_product_is_404() {
    let app = app();
    let (status, body) = send(
        &app,
        post(
            "/comments/0192b3c4-d5e6-7f8a-9b0c-1d2e3f4a5b6c",
            json!({"text": "hello"}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");

    let (status, _) = send(&app, post("/comments/abc", json!({"text": "hello"}), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, get("/products")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_message_requires_token_and_records_role() {
    let app = app();
    let id = create_product(&app).await;
    let uri = format!("/messages/{id}");

    let (status, _) = send(&app, post(&uri, json!({"text": "Still available?"}), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        post(&uri, json!({"text": "Still available?"}), Some("garbage")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = auth().issue("user-1", "buyer").unwrap();
    let (status, body) = send(
        &app,
        post(
            &uri,
            json!({"text": "Still available?", "sender": "seller"}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Message sent successfully");

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["sender"], "buyer");
    assert_eq!(body[0]["text"], "Still available?");
}

#[tokio::test]
async fn test_review_rating_validation() {
    let app = app();
    let id = create_product(&app).await;
    let uri = format!("/reviews/{id}");

    for rating in [0, 6] {
        let (status, body) = send(
            &app,
            post(&uri, json!({"text": "meh", "rating": rating}), None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Rating must be between 1 and 5");
    }

    let (status, body) = send(&app, post(&uri, json!({"text": "meh"}), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Review text and rating are required");

    let (status, _) = send(&app, post(&uri, json!({"text": "Lovely", "rating": 5}), None)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get(&uri)).await;
    assert_eq!(body[0]["rating"], 5);
}

#[tokio::test]
async fn test_list_subresources_of_missing_product_is_404() {
    let app = app();
    for prefix in ["comments", "messages", "reviews"] {
        let (status, _) = send(&app, get(&format!("/{prefix}/not-a-uuid"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_undecodable_product_id_is_json_400() {
    let app = app();
    for uri in ["/comments/%FF", "/reviews/%FF"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("UTF-8"));
    }

    let (status, body) = send(&app, post("/comments/%FF", json!({"text": "hi"}), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}
