pub mod currency;
pub mod error;
pub mod telemetry;

pub use currency::Currency;
pub use error::{AppError, Result};
