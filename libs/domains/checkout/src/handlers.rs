//! HTTP handlers for checkout lookups

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CheckoutResult;
use crate::models::{PaymentMethod, PaymentReceipt, PaymentRequest, ShippingMethod};
use crate::service::CheckoutService;

/// OpenAPI documentation for the checkout endpoints
#[derive(OpenApi)]
#[openapi(
    paths(payment_security, process_payment, shipping_methods),
    components(
        schemas(PaymentMethod, PaymentRequest, PaymentReceipt, ShippingMethod),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags((name = "Checkout", description = "Payment and shipping options"))
)]
pub struct ApiDoc;

pub fn router(service: CheckoutService) -> Router {
    Router::new()
        .route("/payment-security", get(payment_security))
        .route("/process-payment", post(process_payment))
        .route("/shipping-methods", get(shipping_methods))
        .with_state(Arc::new(service))
}

/// List accepted payment methods
#[utoipa::path(
    get,
    path = "/payment-security",
    tag = "Checkout",
    responses(
        (status = 200, description = "Payment method names", body = Vec<String>,
            example = json!(["GCash", "PayMaya", "Credit Card", "Cash on Delivery"]))
    )
)]
async fn payment_security(State(service): State<Arc<CheckoutService>>) -> Json<Vec<String>> {
    Json(service.payment_methods())
}

/// Simulate a payment
#[utoipa::path(
    post,
    path = "/process-payment",
    tag = "Checkout",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment accepted", body = PaymentReceipt),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn process_payment(
    State(service): State<Arc<CheckoutService>>,
    ValidatedJson(request): ValidatedJson<PaymentRequest>,
) -> CheckoutResult<Json<PaymentReceipt>> {
    Ok(Json(service.process_payment(request)?))
}

/// List shipping options and their flat fees
#[utoipa::path(
    get,
    path = "/shipping-methods",
    tag = "Checkout",
    responses(
        (status = 200, description = "Shipping options", body = Vec<ShippingMethod>)
    )
)]
async fn shipping_methods(State(service): State<Arc<CheckoutService>>) -> Json<Vec<ShippingMethod>> {
    Json(service.shipping_methods())
}
