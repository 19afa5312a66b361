use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_checkout::{CheckoutService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    handlers::router(CheckoutService::new())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn pay(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/process-payment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_payment_security_lists_methods() {
    let (status, body) = send(
        Request::builder()
            .uri("/payment-security")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!(["GCash", "PayMaya", "Credit Card", "Cash on Delivery"])
    );
}

#[tokio::test]
async fn test_shipping_methods_are_static() {
    let (status, body) = send(
        Request::builder()
            .uri("/shipping-methods")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": "jt", "name": "J&T", "cost": 50},
            {"id": "flash", "name": "Flash Express", "cost": 70}
        ])
    );
}

#[tokio::test]
async fn test_process_payment_echoes_receipt() {
    let (status, body) = send(pay(json!({"paymentMethod": "GCash", "amount": 499.5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Payment processed successfully",
            "paymentMethod": "GCash",
            "amount": 499.5
        })
    );
}

#[tokio::test]
async fn test_process_payment_rejects_bad_input() {
    let (status, body) = send(pay(json!({"paymentMethod": "GCash"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment method and amount are required");

    let (status, _) = send(pay(json!({"paymentMethod": "Bitcoin", "amount": 10}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(pay(json!({"paymentMethod": "GCash", "amount": -1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
