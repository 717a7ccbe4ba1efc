//! Account domain errors

use thiserror::Error;

use core_kernel::{AccountNumber, Money, MoneyError};

/// Errors that can occur in the account domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds in account {account_number}: requested {requested}, available {available}")]
    InsufficientFunds {
        account_number: AccountNumber,
        requested: Money,
        available: Money,
    },

    /// Amount is not acceptable for the operation
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Account type text did not name a known type
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),

    /// Arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl AccountError {
    /// Creates an InvalidAmount error with a message
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        AccountError::InvalidAmount(message.into())
    }
}
