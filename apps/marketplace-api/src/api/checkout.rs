//! Checkout API routes

use axum::Router;
use domain_checkout::{CheckoutService, handlers};

pub fn router() -> Router {
    handlers::router(CheckoutService::new())
}
