//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! A `Money` value is never negative: debits are expressed by the operation
//! that consumes the amount, not by the sign of the amount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Decimal places used when an amount is displayed
pub const DISPLAY_PRECISION: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),

    #[error("Subtraction would go below zero: {minuend} - {subtrahend}")]
    Underflow {
        minuend: Decimal,
        subtrahend: Decimal,
    },

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(Decimal),
}

/// A non-negative monetary amount
///
/// The full decimal precision is kept, so rate calculations stay exact;
/// rounding to cents happens only when the amount is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` if `amount` is below zero
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        // `-0` parses as a sign-negative zero; store it as plain zero.
        let amount = if amount.is_zero() {
            Decimal::ZERO
        } else {
            amount.normalize()
        };
        Ok(Self { amount })
    }

    /// Creates Money from an amount in minor units (cents)
    pub fn from_minor(minor_units: u64) -> Self {
        Self {
            amount: (Decimal::from(minor_units) / dec!(100)).normalize(),
        }
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: Decimal::ZERO }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Rounds to display precision using banker's rounding
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                DISPLAY_PRECISION,
                rust_decimal::RoundingStrategy::MidpointNearestEven,
            ),
        }
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Money::new(sum)
    }

    /// Checked subtraction that refuses to go below zero
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if other.amount > self.amount {
            return Err(MoneyError::Underflow {
                minuend: self.amount,
                subtrahend: other.amount,
            });
        }
        Money::new(self.amount - other.amount)
    }

    /// Adds up `amounts`, failing instead of wrapping on overflow
    pub fn checked_sum<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(&amount))
    }

    /// Multiplies by a rate
    pub fn multiply(&self, rate: Rate) -> Result<Self, MoneyError> {
        let product = self
            .amount
            .checked_mul(rate.as_decimal())
            .ok_or(MoneyError::Overflow)?;
        Money::new(product)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.dp$}", self.round_to_cents().amount, dp = DISPLAY_PRECISION as usize)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| MoneyError::InvalidAmount(trimmed.to_string()))?;
        Money::new(amount)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.amount
    }
}

/// Represents a percentage rate (e.g., interest rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.04 for 4%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction (e.g., 0.04 for 4%)
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidRate` for negative values
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::InvalidRate(value));
        }
        Ok(Self { value: value.normalize() })
    }

    /// Creates a rate from basis points (e.g., 400 for 4%)
    pub fn from_basis_points(basis_points: u32) -> Self {
        Self {
            value: Decimal::new(i64::from(basis_points), 4).normalize(),
        }
    }

    /// Creates a rate from a percentage (e.g., 4.0 for 4%)
    pub fn from_percentage(percentage: Decimal) -> Result<Self, MoneyError> {
        Self::new(percentage / dec!(100))
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Result<Money, MoneyError> {
        money.multiply(*self)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn add_then_sub_restores_original(
            a in 0u64..1_000_000_000u64,
            b in 0u64..1_000_000_000u64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);

            prop_assert_eq!(ma.checked_add(&mb).unwrap().checked_sub(&mb).unwrap(), ma);
        }

        #[test]
        fn sub_never_goes_negative(
            a in 0u64..1_000_000u64,
            b in 0u64..1_000_000u64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);

            match ma.checked_sub(&mb) {
                Ok(diff) => prop_assert!(a >= b && !diff.amount().is_sign_negative()),
                Err(_) => prop_assert!(b > a),
            }
        }
    }
}
