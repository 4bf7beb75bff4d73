use crate::core::{Currency, Result};
use async_trait::async_trait;

use crate::modules::orders::models::{Order, OrderRequest};

/// Payment gateway able to create orders
///
/// One call yields exactly one outcome: the created order or a typed error.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit the request to the gateway's order-creation endpoint
    async fn create_order(&self, request: &OrderRequest) -> Result<Order>;

    /// Get gateway name
    fn name(&self) -> &str;

    /// Check if gateway supports a currency
    fn supports_currency(&self, currency: Currency) -> bool;
}
