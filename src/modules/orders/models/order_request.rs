// Order request submitted to the gateway's order-creation endpoint.
//
// Amounts are always in the currency's minor unit (paise, cents).
// Preconditions are checked here instead of relying on gateway-side validation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{AppError, Currency, Result};

/// Longest receipt identifier the gateway accepts
pub const MAX_RECEIPT_LEN: usize = 40;

/// Most notes the gateway stores on one order
pub const MAX_NOTES: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    amount: i64,
    currency: Currency,
    receipt: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    notes: BTreeMap<String, String>,
}

impl OrderRequest {
    /// Builds a validated request. Fields are stored exactly as given.
    pub fn new(amount: i64, currency: Currency, receipt: impl Into<String>) -> Result<Self> {
        let receipt = receipt.into();

        if amount <= 0 {
            return Err(AppError::validation(format!(
                "Order amount must be positive, got {}",
                amount
            )));
        }

        if receipt.trim().is_empty() {
            return Err(AppError::validation("Receipt identifier must not be empty"));
        }

        if receipt.chars().count() > MAX_RECEIPT_LEN {
            return Err(AppError::validation(format!(
                "Receipt identifier must be at most {} characters",
                MAX_RECEIPT_LEN
            )));
        }

        Ok(Self {
            amount,
            currency,
            receipt,
            notes: BTreeMap::new(),
        })
    }

    /// Parses the currency code before validating
    pub fn from_parts(amount: i64, currency: &str, receipt: impl Into<String>) -> Result<Self> {
        let currency: Currency = currency.parse().map_err(AppError::validation)?;
        Self::new(amount, currency, receipt)
    }

    /// Attaches a key/value note that the gateway stores with the order
    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AppError::validation("Note key must not be empty"));
        }
        if !self.notes.contains_key(&key) && self.notes.len() >= MAX_NOTES {
            return Err(AppError::validation(format!(
                "An order carries at most {} notes",
                MAX_NOTES
            )));
        }
        self.notes.insert(key, value.into());
        Ok(self)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn receipt(&self) -> &str {
        &self.receipt
    }

    pub fn notes(&self) -> &BTreeMap<String, String> {
        &self.notes
    }
}
