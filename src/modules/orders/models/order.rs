use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::Currency;

/// Order lifecycle as reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order exists, no payment attempted yet
    Created,
    /// At least one payment attempt was made
    Attempted,
    /// A payment against the order was captured
    Paid,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "created"),
            OrderStatus::Attempted => write!(f, "attempted"),
            OrderStatus::Paid => write!(f, "paid"),
        }
    }
}

/// Order created by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Gateway order id, e.g. `order_EKwxwAgItmmXdp`
    pub id: String,

    #[serde(default = "default_entity")]
    pub entity: String,

    /// Amount in minor units
    pub amount: i64,

    #[serde(default)]
    pub amount_paid: i64,

    /// Required: a reply without it cannot tell whether the order is payable
    pub amount_due: i64,

    pub currency: Currency,

    #[serde(default)]
    pub receipt: Option<String>,

    pub status: OrderStatus,

    #[serde(default)]
    pub attempts: u32,

    /// The gateway sends `[]` instead of `{}` for an order without notes
    #[serde(default, deserialize_with = "notes_from_object_or_array")]
    pub notes: BTreeMap<String, String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

fn default_entity() -> String {
    "order".to_string()
}

fn notes_from_object_or_array<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| {
                let v = match v {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect()),
        serde_json::Value::Array(items) if items.is_empty() => Ok(BTreeMap::new()),
        serde_json::Value::Null => Ok(BTreeMap::new()),
        other => Err(serde::de::Error::custom(format!(
            "unexpected notes value: {}",
            other
        ))),
    }
}

impl Order {
    pub fn is_payable(&self) -> bool {
        self.status != OrderStatus::Paid && self.amount_due > 0
    }

    /// Amount formatted for display, e.g. `INR 500.00`
    pub fn display_amount(&self) -> String {
        self.currency.format_minor(self.amount)
    }
}
