use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::gateway_trait::OrderGateway;
use crate::config::GatewayConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::orders::models::{Order, OrderRequest};

/// Razorpay Orders API client
///
/// Implements OrderGateway for the Razorpay REST API.
/// API Documentation: https://razorpay.com/docs/api/orders/create/
pub struct RazorpayClient {
    client: Client,
    key_id: String,
    key_secret: String,
    base_url: String,
}

impl RazorpayClient {
    /// Create a new Razorpay client
    ///
    /// # Arguments
    /// * `config` - key id/secret (RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET), base URL and timeout
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Public key id, the only credential the checkout widget may see
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.base_url)
    }
}

/// Maps a raw gateway reply onto an order or a typed error
pub(crate) fn decode_order_response(status: StatusCode, body: &str) -> Result<Order> {
    if !status.is_success() {
        return Err(match serde_json::from_str::<RazorpayErrorEnvelope>(body) {
            Ok(envelope) => AppError::GatewayRejected {
                status: status.as_u16(),
                code: envelope.error.code,
                description: envelope.error.description,
            },
            Err(_) => AppError::gateway(format!(
                "Razorpay API error - HTTP {} ({})",
                status.as_u16(),
                body
            )),
        });
    }

    serde_json::from_str(body)
        .map_err(|e| AppError::gateway(format!("Failed to parse Razorpay order: {}", e)))
}

#[async_trait]
impl OrderGateway for RazorpayClient {
    async fn create_order(&self, request: &OrderRequest) -> Result<Order> {
        let response = self
            .client
            .post(self.orders_url())
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::gateway(format!(
                        "Razorpay gateway unavailable: {} ({})",
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    AppError::gateway(format!("Razorpay API request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read Razorpay response: {}", e)))?;

        decode_order_response(status, &body)
    }

    fn name(&self) -> &str {
        "razorpay"
    }

    fn supports_currency(&self, _currency: Currency) -> bool {
        // International currencies need to be enabled on the account;
        // the gateway reports that itself, so all known codes go through.
        true
    }
}

// Razorpay API error structures

#[derive(Debug, Deserialize)]
struct RazorpayErrorEnvelope {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    code: String,
    #[serde(default)]
    description: String,
}
