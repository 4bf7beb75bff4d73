pub mod booking;

pub use booking::BookingRequest;
