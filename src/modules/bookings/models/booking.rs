// Parking slot booking that precedes payment.
//
// A booking is priced per started hour and paid for through a regular order.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

pub const MIN_HOURS: u32 = 1;
pub const MAX_HOURS: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub start_time: NaiveDateTime,
    pub hours: u32,
}

impl BookingRequest {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        start_time: NaiveDateTime,
        hours: u32,
    ) -> Result<Self> {
        let booking = Self {
            name: name.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            start_time,
            hours,
        };
        booking.validate()?;
        Ok(booking)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Booking name must not be empty"));
        }

        if !is_valid_phone(&self.phone) {
            return Err(AppError::validation(format!(
                "Invalid phone number: {}",
                self.phone
            )));
        }

        if !(MIN_HOURS..=MAX_HOURS).contains(&self.hours) {
            return Err(AppError::validation(format!(
                "Booking must last between {} and {} hours, got {}",
                MIN_HOURS, MAX_HOURS, self.hours
            )));
        }

        Ok(())
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time + Duration::hours(i64::from(self.hours))
    }
}

// 7 to 15 digits, optionally prefixed with '+'
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
