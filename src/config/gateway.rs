use crate::core::{AppError, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";
pub const DEFAULT_CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

/// Credentials and endpoints for the Razorpay API
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    /// Public key id, also handed to the checkout widget
    pub key_id: String,
    /// Server-side secret, never leaves this process
    pub key_secret: String,
    pub base_url: String,
    pub checkout_script_url: String,
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl GatewayConfig {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            checkout_script_url: DEFAULT_CHECKOUT_SCRIPT_URL.to_string(),
            timeout: default_timeout(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_id.trim().is_empty() {
            return Err(AppError::configuration("RAZORPAY_KEY_ID must not be empty"));
        }

        if self.key_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "RAZORPAY_KEY_SECRET must not be empty",
            ));
        }

        if self.timeout.is_zero() {
            return Err(AppError::configuration(
                "Gateway timeout must be greater than 0",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::configuration(format!(
                "Invalid RAZORPAY_BASE_URL: {}",
                self.base_url
            )));
        }

        Ok(())
    }
}

// Keeps the secret out of logs
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"***")
            .field("base_url", &self.base_url)
            .field("checkout_script_url", &self.checkout_script_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
