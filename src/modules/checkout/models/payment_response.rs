use serde::{Deserialize, Serialize};

/// Outcome reported by the checkout widget once the customer has paid
///
/// The signature is carried as-is and never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: String,

    #[serde(rename = "razorpay_order_id")]
    pub order_id: String,

    #[serde(rename = "razorpay_signature")]
    pub signature: String,
}

impl PaymentResponse {
    pub fn new(
        payment_id: impl Into<String>,
        order_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            payment_id: payment_id.into(),
            order_id: order_id.into(),
            signature: signature.into(),
        }
    }
}
