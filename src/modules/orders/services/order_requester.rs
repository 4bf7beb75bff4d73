use std::sync::Arc;

use tracing::{error, info};

use super::gateway_trait::OrderGateway;
use crate::core::{AppError, Result};
use crate::modules::orders::models::{Order, OrderRequest};

/// Submits order requests to a gateway and hands back the created order
#[derive(Clone)]
pub struct OrderRequester {
    gateway: Arc<dyn OrderGateway>,
}

impl OrderRequester {
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }

    /// Create an order. The gateway sees the request exactly as given, once.
    ///
    /// The created order is written to the diagnostic log and returned so the
    /// caller can thread its id into the checkout config.
    pub async fn request(&self, request: OrderRequest) -> Result<Order> {
        let gateway_name = self.gateway.name();

        info!(
            gateway = %gateway_name,
            receipt = %request.receipt(),
            amount = request.amount(),
            currency = %request.currency(),
            "Creating order with gateway"
        );

        if !self.gateway.supports_currency(request.currency()) {
            return Err(AppError::validation(format!(
                "Gateway '{}' does not support {}",
                gateway_name,
                request.currency()
            )));
        }

        match self.gateway.create_order(&request).await {
            Ok(order) => {
                info!(
                    gateway = %gateway_name,
                    order_id = %order.id,
                    status = %order.status,
                    amount_due = order.amount_due,
                    receipt = ?order.receipt,
                    "Order created"
                );
                Ok(order)
            }
            Err(e) => {
                error!(
                    gateway = %gateway_name,
                    receipt = %request.receipt(),
                    error = %e,
                    "Failed to create order"
                );
                Err(e)
            }
        }
    }
}
