pub mod checkout_config;
pub mod payment_response;

pub use checkout_config::{CheckoutConfig, CheckoutOptions, Prefill};
pub use payment_response::PaymentResponse;
