// Checkout widget configuration.
//
// CheckoutOptions is what the vendor widget receives, serialized with the
// widget's own field names. The response handler stays on the Rust side and
// is handed to the session that outlives widget activation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MerchantProfile;
use crate::core::{AppError, Currency, Result};
use crate::modules::checkout::services::response_handler::ResponseHandler;
use crate::modules::orders::models::Order;

/// Customer details pre-filled into the widget form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Prefill {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.contact.is_none()
    }
}

/// Widget options, one-to-one with the vendor's checkout options object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    /// Public key id
    pub key: String,
    /// Amount in minor units
    pub amount: i64,
    pub currency: Currency,
    pub order_id: String,
    /// Merchant display name
    pub name: String,
    pub description: String,
    /// Logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Prefill::is_empty")]
    pub prefill: Prefill,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
}

impl CheckoutOptions {
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(AppError::validation("Checkout key must not be empty"));
        }

        if self.order_id.trim().is_empty() {
            return Err(AppError::validation("Checkout order id must not be empty"));
        }

        if self.amount <= 0 {
            return Err(AppError::validation(format!(
                "Checkout amount must be positive, got {}",
                self.amount
            )));
        }

        Ok(())
    }
}

/// Everything needed to activate one checkout widget
pub struct CheckoutConfig {
    options: CheckoutOptions,
    response_handler: Box<dyn ResponseHandler>,
}

impl CheckoutConfig {
    pub fn new(options: CheckoutOptions, handler: impl ResponseHandler + 'static) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            options,
            response_handler: Box::new(handler),
        })
    }

    /// Builds the config from a freshly created order.
    ///
    /// Amount, currency and order id come from the gateway's order, so the
    /// widget always charges what was actually ordered.
    pub fn for_order(
        key: &str,
        order: &Order,
        merchant: &MerchantProfile,
        handler: impl ResponseHandler + 'static,
    ) -> Result<Self> {
        if !order.is_payable() {
            return Err(AppError::validation(format!(
                "Order {} is {} and cannot be paid again",
                order.id, order.status
            )));
        }

        let options = CheckoutOptions {
            key: key.to_string(),
            amount: order.amount,
            currency: order.currency,
            order_id: order.id.clone(),
            name: merchant.name.clone(),
            description: merchant.description.clone(),
            image: merchant.logo_url.clone(),
            prefill: Prefill::default(),
            notes: order.notes.clone(),
        };

        Self::new(options, handler)
    }

    pub fn with_prefill(mut self, prefill: Prefill) -> Self {
        self.options.prefill = prefill;
        self
    }

    pub fn options(&self) -> &CheckoutOptions {
        &self.options
    }

    pub fn into_parts(self) -> (CheckoutOptions, Box<dyn ResponseHandler>) {
        (self.options, self.response_handler)
    }
}

impl fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("options", &self.options)
            .field("response_handler", &"<handler>")
            .finish()
    }
}
