//! Prices
//!
//! The backend sends every monetary amount as a plain JSON number in the shop
//! currency, with up to two decimal places. [`Price`] keeps that value exactly as
//! a non-negative decimal; arithmetic on totals goes through
//! [`rusty_money::Money`] and rounding only ever happens when formatting.

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, Round, iso::Currency};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// Errors raised while decoding or combining prices.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The amount was below zero.
    #[error("price {0} is negative")]
    Negative(Decimal),

    /// The amount does not fit the supported range.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Represents a non-negative amount in the shop currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    amount: Decimal,
}

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
    };

    /// Creates a new Price from a whole amount
    pub fn new(value: u64) -> Self {
        Price {
            amount: Decimal::from(value),
        }
    }

    /// The exact amount.
    pub const fn amount(self) -> Decimal {
        self.amount
    }

    /// Decode a decimal amount, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] when the amount is below zero.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }

        Ok(Self {
            amount: amount.normalize(),
        })
    }

    /// Multiply by a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] when the product does not fit.
    pub fn checked_mul(self, quantity: u32) -> Result<Self, PriceError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self {
                amount: amount.normalize(),
            })
            .ok_or(PriceError::Overflow)
    }

    /// Convert into a money value in the given currency.
    pub fn to_money(self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_decimal(self.amount, currency)
    }

    /// Convert a money value back into a price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] for negative amounts.
    pub fn from_money(money: &Money<'_, Currency>) -> Result<Self, PriceError> {
        Self::from_decimal(*money.amount())
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.amount, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;

        Self::from_decimal(amount).map_err(D::Error::custom)
    }
}

/// Sum prices into a money total, starting from zero in `currency`.
///
/// # Errors
///
/// Returns a [`PriceError`] if any conversion or addition fails.
pub fn total_money(
    prices: impl IntoIterator<Item = Result<Price, PriceError>>,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PriceError> {
    prices
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, price| {
            Ok(acc.add(price?.to_money(currency))?)
        })
}

/// Format money the way the till displays it: rounded half-up to the currency's
/// minor unit, thousands grouped with `.`, decimals (if the currency has any)
/// after `,`, and the currency symbol appended.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let minor = money.round(currency.exponent, Round::HalfUp).to_minor_units();
    let scale = 10_u64.pow(currency.exponent);
    let magnitude = minor.unsigned_abs();

    let mut formatted = String::new();

    if minor < 0 {
        formatted.push('-');
    }

    formatted.push_str(&group_thousands(magnitude / scale));

    if currency.exponent > 0 {
        let width = currency.exponent as usize;
        formatted.push_str(&format!(",{:0width$}", magnitude % scale));
    }

    formatted.push_str(currency.symbol);

    formatted
}

/// Format a price in the given currency.
pub fn format_price(price: Price, currency: &'static Currency) -> String {
    format_money(&price.to_money(currency))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.amount(), Decimal::from(1000));
    }

    #[test]
    fn decodes_integer_and_float_json() -> TestResult {
        assert_eq!(serde_json::from_str::<Price>("20000")?, Price::new(20_000));
        assert_eq!(serde_json::from_str::<Price>("15000.0")?, Price::new(15_000));

        Ok(())
    }

    #[test]
    fn keeps_two_decimal_places() -> TestResult {
        let price = serde_json::from_str::<Price>("12500.50")?;

        assert_eq!(price.amount(), Decimal::new(1_250_050, 2));
        assert_eq!(price.checked_mul(2)?, Price::new(25_001));

        Ok(())
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(serde_json::from_str::<Price>("-1").is_err());
        assert_eq!(
            Price::from_decimal(Decimal::new(-105, 1)),
            Err(PriceError::Negative(Decimal::new(-105, 1)))
        );
    }

    #[test]
    fn checked_mul_reports_overflow() {
        assert_eq!(
            Price::from_decimal(Decimal::MAX).and_then(|price| price.checked_mul(2)),
            Err(PriceError::Overflow)
        );
        assert_eq!(Price::new(20_000).checked_mul(2), Ok(Price::new(40_000)));
    }

    #[test]
    fn total_money_sums_prices() -> TestResult {
        let total = total_money(
            [
                Ok(Price::new(40_000)),
                Price::from_decimal(Decimal::new(1_500_025, 2)),
            ],
            iso::VND,
        )?;

        assert_eq!(total, Money::from_decimal(Decimal::new(5_500_025, 2), iso::VND));
        assert_eq!(Price::from_money(&total)?.amount(), Decimal::new(5_500_025, 2));

        Ok(())
    }

    #[test]
    fn formats_with_grouping_and_symbol() {
        assert_eq!(
            format_price(Price::new(55_000), iso::VND),
            format!("55.000{}", iso::VND.symbol)
        );
        assert_eq!(
            format_price(Price::new(1_234_567), iso::VND),
            format!("1.234.567{}", iso::VND.symbol)
        );
        assert_eq!(format_price(Price::ZERO, iso::VND), format!("0{}", iso::VND.symbol));
    }

    #[test]
    fn formatting_rounds_to_the_minor_unit() -> TestResult {
        let half = Price::from_decimal(Decimal::new(1_250_050, 2))?;

        assert_eq!(format_price(half, iso::VND), format!("12.501{}", iso::VND.symbol));
        assert_eq!(format_price(half, iso::USD), format!("12.500,50{}", iso::USD.symbol));

        Ok(())
    }
}
