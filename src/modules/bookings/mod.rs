pub mod models;
pub mod services;

pub use models::BookingRequest;
pub use services::{BookedCheckout, BookingCheckout, ParkingFeeCalculator, ParkingLot, SlotStatus};
