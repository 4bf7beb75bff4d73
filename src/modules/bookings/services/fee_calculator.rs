use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::ParkingConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::bookings::models::BookingRequest;
use crate::modules::checkout::models::Prefill;
use crate::modules::orders::OrderRequest;

/// Prices parking bookings and turns them into order requests
#[derive(Debug, Clone)]
pub struct ParkingFeeCalculator {
    hourly_rate: Decimal,
    currency: Currency,
}

impl ParkingFeeCalculator {
    pub fn new(hourly_rate: Decimal, currency: Currency) -> Result<Self> {
        if hourly_rate <= Decimal::ZERO {
            return Err(AppError::validation("Hourly rate must be positive"));
        }
        currency
            .validate_amount(hourly_rate)
            .map_err(AppError::validation)?;

        Ok(Self {
            hourly_rate,
            currency,
        })
    }

    pub fn from_config(config: &ParkingConfig) -> Result<Self> {
        Self::new(config.hourly_rate, config.currency)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Fee in major units, rounded to the currency's precision
    pub fn fee(&self, booking: &BookingRequest) -> Result<Decimal> {
        self.hourly_rate
            .checked_mul(Decimal::from(booking.hours))
            .map(|fee| self.currency.round(fee))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Parking fee for {} hours at {} {} is out of range",
                    booking.hours, self.hourly_rate, self.currency
                ))
            })
    }

    /// Order request for the booking fee on a reserved slot, with a fresh receipt id
    pub fn order_request(&self, booking: &BookingRequest, slot_id: u32) -> Result<OrderRequest> {
        booking.validate()?;

        let amount = self
            .currency
            .to_minor_units(self.fee(booking)?)
            .map_err(AppError::validation)?;

        OrderRequest::new(amount, self.currency, new_receipt())?
            .with_note("slot_id", slot_id.to_string())?
            .with_note("booking_name", booking.name.clone())?
            .with_note("booking_phone", booking.phone.clone())?
            .with_note(
                "booking_start",
                booking.start_time.format("%Y-%m-%d %H:%M").to_string(),
            )?
            .with_note("booking_hours", booking.hours.to_string())
    }

    /// Widget prefill from the booking's contact details
    pub fn prefill(&self, booking: &BookingRequest) -> Prefill {
        Prefill {
            name: Some(booking.name.clone()),
            email: None,
            contact: Some(booking.phone.clone()),
        }
    }
}

fn new_receipt() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("park_{}", &id[..12])
}
