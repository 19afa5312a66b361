use axum_helpers::errors::validation_message;
use strum::IntoEnumIterator;
use validator::Validate;

use crate::error::{CheckoutError, CheckoutResult};
use crate::models::{
    PAYMENT_FIELDS_REQUIRED, PaymentMethod, PaymentReceipt, PaymentRequest, ShippingMethod,
};

/// Checkout lookups and the simulated payment step
#[derive(Debug, Clone, Default)]
pub struct CheckoutService;

impl CheckoutService {
    pub fn new() -> Self {
        Self
    }

    pub fn payment_methods(&self) -> Vec<String> {
        PaymentMethod::iter().map(|m| m.to_string()).collect()
    }

    pub fn shipping_methods(&self) -> Vec<ShippingMethod> {
        ShippingMethod::all()
    }

    /// Validates the request and echoes it back as a receipt.
    pub fn process_payment(&self, request: PaymentRequest) -> CheckoutResult<PaymentReceipt> {
        request
            .validate()
            .map_err(|e| CheckoutError::Validation(validation_message(&e)))?;

        let (Some(method), Some(amount)) = (request.payment_method, request.amount) else {
            return Err(CheckoutError::Validation(PAYMENT_FIELDS_REQUIRED.to_string()));
        };

        let payment_method: PaymentMethod = method.trim().parse().map_err(|_| {
            CheckoutError::Validation(format!("Unsupported payment method: {}", method.trim()))
        })?;

        tracing::info!(%payment_method, amount, "Payment processed");
        Ok(PaymentReceipt {
            message: "Payment processed successfully".to_string(),
            payment_method,
            amount,
        })
    }
}
