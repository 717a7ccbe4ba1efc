//! Flat-rate interest

use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError, Rate};
use crate::account::AccountType;

/// Monthly interest rate for savings accounts, in basis points (4%)
pub const DEFAULT_SAVINGS_RATE_BP: u32 = 400;

/// Decides whether an account earns interest and how much
///
/// Each application credits `balance × rate` on the current balance; no
/// compounding period is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestPolicy {
    rate: Rate,
}

impl InterestPolicy {
    /// Creates a policy paying `rate` to savings accounts
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// Returns the rate credited on each application
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Only savings accounts earn interest
    pub fn applies_to(&self, account_type: AccountType) -> bool {
        account_type == AccountType::Savings
    }

    /// Interest due on `balance`
    pub fn interest_on(&self, balance: &Money) -> Result<Money, MoneyError> {
        self.rate.apply(balance)
    }
}

impl Default for InterestPolicy {
    fn default() -> Self {
        Self::new(Rate::from_basis_points(DEFAULT_SAVINGS_RATE_BP))
    }
}
