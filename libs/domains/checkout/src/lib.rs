//! Checkout Domain
//!
//! Static payment and shipping lookups plus a simulated payment step. No
//! payment gateway is contacted.

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::{CheckoutError, CheckoutResult};
pub use models::{PaymentMethod, PaymentReceipt, PaymentRequest, ShippingMethod};
pub use service::CheckoutService;
