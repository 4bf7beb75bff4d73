use crate::core::{AppError, Currency, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub mod gateway;
pub mod merchant;

pub use gateway::GatewayConfig;
pub use merchant::MerchantProfile;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub razorpay: GatewayConfig,
    pub merchant: MerchantProfile,
    pub parking: ParkingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    /// Load `.env` once and read the settings needed before anything else runs
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

/// Pricing used to turn a parking booking into an order
#[derive(Debug, Clone, Deserialize)]
pub struct ParkingConfig {
    pub hourly_rate: Decimal,
    pub currency: Currency,
    pub total_slots: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_app(AppConfig::from_env())
    }

    /// Load the remaining sections around an already loaded `AppConfig`
    pub fn with_app(app: AppConfig) -> Result<Self> {
        let config = Config {
            app,
            razorpay: GatewayConfig {
                key_id: required("RAZORPAY_KEY_ID")?,
                key_secret: required("RAZORPAY_KEY_SECRET")?,
                base_url: env::var("RAZORPAY_BASE_URL")
                    .unwrap_or_else(|_| gateway::DEFAULT_BASE_URL.to_string()),
                checkout_script_url: env::var("CHECKOUT_SCRIPT_URL")
                    .unwrap_or_else(|_| gateway::DEFAULT_CHECKOUT_SCRIPT_URL.to_string()),
                timeout: Duration::from_secs(
                    env::var("RAZORPAY_TIMEOUT_SECS")
                        .unwrap_or_else(|_| "30".to_string())
                        .parse()
                        .map_err(|_| AppError::configuration("Invalid RAZORPAY_TIMEOUT_SECS"))?,
                ),
            },
            merchant: MerchantProfile {
                name: required("MERCHANT_NAME")?,
                description: env::var("MERCHANT_DESCRIPTION").unwrap_or_default(),
                logo_url: env::var("MERCHANT_LOGO_URL").ok().filter(|s| !s.is_empty()),
            },
            parking: ParkingConfig {
                hourly_rate: env::var("PARKING_HOURLY_RATE")
                    .unwrap_or_else(|_| "50.00".to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid PARKING_HOURLY_RATE"))?,
                currency: env::var("PARKING_CURRENCY")
                    .unwrap_or_else(|_| "INR".to_string())
                    .parse()
                    .map_err(|e: String| AppError::configuration(format!("PARKING_CURRENCY: {}", e)))?,
                total_slots: env::var("PARKING_TOTAL_SLOTS")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid PARKING_TOTAL_SLOTS"))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.razorpay.validate()?;

        if self.merchant.name.trim().is_empty() {
            return Err(AppError::configuration("MERCHANT_NAME must not be empty"));
        }

        if self.parking.hourly_rate <= Decimal::ZERO {
            return Err(AppError::configuration(
                "Parking hourly rate must be greater than 0",
            ));
        }

        self.parking
            .currency
            .validate_amount(self.parking.hourly_rate)
            .map_err(AppError::configuration)?;

        if self.parking.total_slots == 0 {
            return Err(AppError::configuration(
                "PARKING_TOTAL_SLOTS must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AppError::configuration(format!("{} not set", name)))
}
