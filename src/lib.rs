//! Razorpay order creation and checkout handoff
//!
//! Creates an order through the gateway's REST API and opens the hosted
//! checkout widget for exactly that order.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bookings;
pub use modules::checkout;
pub use modules::orders;
