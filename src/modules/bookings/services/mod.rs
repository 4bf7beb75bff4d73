pub mod booking_checkout;
pub mod fee_calculator;
pub mod slot_pool;

pub use booking_checkout::{BookedCheckout, BookingCheckout};
pub use fee_calculator::ParkingFeeCalculator;
pub use slot_pool::{ParkingLot, SlotStatus};
