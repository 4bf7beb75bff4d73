// Property-based tests for parking fee pricing
//
// - Fee scales linearly with booked hours
// - Order amount is the fee expressed in minor units
// - Rates too large to price are errors, never panics

use chrono::NaiveDateTime;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rzp_checkout::bookings::{BookingRequest, ParkingFeeCalculator};
use rzp_checkout::core::Currency;

fn booking(hours: u32) -> BookingRequest {
    let start = NaiveDateTime::parse_from_str("2024-03-01 09:30", "%Y-%m-%d %H:%M").unwrap();
    BookingRequest::new("Asha", "9876543210", start, hours).unwrap()
}

proptest! {
    #[test]
    fn test_fee_scales_with_hours(
        rate_paise in 1i64..1_000_000i64,
        hours in 1u32..=24u32
    ) {
        let rate = Decimal::new(rate_paise, 2);
        let calculator = ParkingFeeCalculator::new(rate, Currency::INR).unwrap();

        prop_assert_eq!(calculator.fee(&booking(hours)).unwrap(), rate * Decimal::from(hours));
    }

    #[test]
    fn test_order_amount_is_fee_in_minor_units(
        rate_paise in 1i64..1_000_000i64,
        hours in 1u32..=24u32
    ) {
        let calculator = ParkingFeeCalculator::new(Decimal::new(rate_paise, 2), Currency::INR).unwrap();
        let request = calculator.order_request(&booking(hours), 0).unwrap();

        prop_assert_eq!(request.amount(), rate_paise * i64::from(hours));
        prop_assert_eq!(request.currency(), Currency::INR);
        prop_assert!(request.receipt().starts_with("park_"));
    }

    #[test]
    fn test_zero_decimal_currency_amount_equals_fee(
        rate in 1i64..100_000i64,
        hours in 1u32..=24u32
    ) {
        let calculator = ParkingFeeCalculator::new(Decimal::from(rate), Currency::JPY).unwrap();
        let request = calculator.order_request(&booking(hours), 0).unwrap();

        prop_assert_eq!(request.amount(), rate * i64::from(hours));
    }

    #[test]
    fn test_oversized_rates_are_rejected(
        exponent in 19u32..=28u32,
        hours in 1u32..=24u32
    ) {
        let rate = Decimal::from_i128_with_scale(10i128.pow(exponent), 0);
        let calculator = ParkingFeeCalculator::new(rate, Currency::INR).unwrap();

        prop_assert!(calculator.order_request(&booking(hours), 0).is_err());
    }
}
