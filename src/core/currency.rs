use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted for orders, with their minor-unit precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee (paise, 2 decimal places)
    INR,
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Singapore Dollar (2 decimal places)
    SGD,
    /// UAE Dirham (2 decimal places)
    AED,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// Indonesian Rupiah (no decimal places)
    IDR,
    /// Japanese Yen (no decimal places)
    JPY,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::INR,
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::SGD,
        Currency::AED,
        Currency::MYR,
        Currency::IDR,
        Currency::JPY,
    ];

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::SGD => "SGD",
            Currency::AED => "AED",
            Currency::MYR => "MYR",
            Currency::IDR => "IDR",
            Currency::JPY => "JPY",
        }
    }

    /// Returns the decimal scale for this currency
    /// - IDR/JPY: 0 (no decimals)
    /// - everything else: 2
    pub fn scale(&self) -> u32 {
        match self {
            Currency::IDR | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Validates that a decimal value has the correct scale for this currency
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        let scale = amount.normalize().scale();
        let expected_scale = self.scale();

        if scale > expected_scale {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self, expected_scale, scale
            ));
        }

        if amount < Decimal::ZERO {
            return Err(format!("{} amount cannot be negative", self));
        }

        Ok(())
    }

    /// Converts a major-unit amount (e.g. 500.00 INR) into minor units (50000 paise)
    pub fn to_minor_units(&self, amount: Decimal) -> Result<i64, String> {
        self.validate_amount(amount)?;

        let factor = Decimal::from(10i64.pow(self.scale()));
        amount
            .checked_mul(factor)
            .and_then(|minor| minor.to_i64())
            .ok_or_else(|| format!("{} amount {} is out of range", self, amount))
    }

    /// Converts minor units back into a major-unit decimal
    pub fn from_minor_units(&self, minor: i64) -> Decimal {
        Decimal::new(minor, self.scale())
    }

    /// Formats a minor-unit amount for display with the correct decimal places
    pub fn format_minor(&self, minor: i64) -> String {
        let amount = self.from_minor_units(minor);
        let scale = self.scale();
        if scale == 0 {
            format!("{} {}", self, amount)
        } else {
            format!("{} {:.width$}", self, amount, width = scale as usize)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == upper)
            .ok_or_else(|| format!("Invalid currency: {}", s))
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
