/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for order creation and checkout handoff
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Precondition violations on requests and configs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment gateway unreachable or returned something unusable
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Payment gateway answered with an error body
    #[error("Gateway rejected request (HTTP {status}): {code} - {description}")]
    GatewayRejected {
        status: u16,
        code: String,
        description: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the checkout page failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True when the failure came from the gateway side rather than local input
    pub fn is_gateway_failure(&self) -> bool {
        matches!(self, AppError::Gateway(_) | AppError::GatewayRejected { .. })
    }
}
