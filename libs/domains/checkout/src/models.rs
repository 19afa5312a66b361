use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;
use validator::Validate;

pub const PAYMENT_FIELDS_REQUIRED: &str = "Payment method and amount are required";

/// Accepted payment methods, serialized by their display names
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentMethod {
    #[serde(rename = "GCash")]
    #[strum(serialize = "GCash")]
    GCash,
    #[serde(rename = "PayMaya")]
    #[strum(serialize = "PayMaya")]
    PayMaya,
    #[serde(rename = "Credit Card")]
    #[strum(serialize = "Credit Card")]
    CreditCard,
    #[serde(rename = "Cash on Delivery")]
    #[strum(serialize = "Cash on Delivery")]
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShippingMethod {
    #[schema(example = "jt")]
    pub id: String,
    #[schema(example = "J&T")]
    pub name: String,
    /// Flat fee in pesos
    #[schema(example = 50)]
    pub cost: u32,
}

impl ShippingMethod {
    fn new(id: &str, name: &str, cost: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cost,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::new("jt", "J&T", 50),
            Self::new("flash", "Flash Express", 70),
        ]
    }
}

/// `POST /process-payment` body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(
        required(message = "Payment method and amount are required"),
        custom(function = "axum_helpers::not_blank", message = "Payment method and amount are required")
    )]
    #[schema(example = "GCash")]
    pub payment_method: Option<String>,
    #[validate(
        required(message = "Payment method and amount are required"),
        range(exclusive_min = 0.0, message = "Amount must be greater than zero")
    )]
    #[schema(example = 499.5)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub message: String,
    pub payment_method: PaymentMethod,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_payment_method_names() {
        let names: Vec<String> = PaymentMethod::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["GCash", "PayMaya", "Credit Card", "Cash on Delivery"]);
        assert_eq!(
            serde_json::to_value(PaymentMethod::CashOnDelivery).unwrap(),
            "Cash on Delivery"
        );
    }

    #[test]
    fn test_payment_method_parse_ignores_case() {
        assert_eq!("gcash".parse::<PaymentMethod>().unwrap(), PaymentMethod::GCash);
        assert_eq!(
            "credit card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert!("Bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_request_validation() {
        let request = |method: Option<&str>, amount: Option<f64>| PaymentRequest {
            payment_method: method.map(str::to_string),
            amount,
        };
        assert!(request(Some("GCash"), Some(10.0)).validate().is_ok());
        assert!(request(None, Some(10.0)).validate().is_err());
        assert!(request(Some(" "), Some(10.0)).validate().is_err());
        assert!(request(Some("GCash"), None).validate().is_err());
        assert!(request(Some("GCash"), Some(0.0)).validate().is_err());
        assert!(request(Some("GCash"), Some(-5.0)).validate().is_err());
    }
}
