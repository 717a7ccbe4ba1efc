//! Parsing of operator input
//!
//! Every parser turns bad text into a recoverable `CliError::InvalidInput`
//! so a typo never ends the session.

use core_kernel::{AccountNumber, Money, MoneyError};
use domain_account::AccountType;
use crate::error::CliError;

/// Parses a monetary amount such as `50` or `12.75`
pub fn parse_amount(raw: &str) -> Result<Money, CliError> {
    raw.parse::<Money>().map_err(|err| match err {
        MoneyError::Negative(_) => CliError::invalid_input("amount cannot be negative."),
        _ => CliError::invalid_input(format!("'{}' is not a valid amount.", raw.trim())),
    })
}

/// Parses an account number such as `3`
pub fn parse_account_number(raw: &str) -> Result<AccountNumber, CliError> {
    raw.parse::<AccountNumber>()
        .map_err(|_| CliError::invalid_input(format!("'{}' is not a valid account number.", raw.trim())))
}

/// Parses `savings` or `checking`, ignoring case
pub fn parse_account_type(raw: &str) -> Result<AccountType, CliError> {
    raw.parse::<AccountType>().map_err(|_| {
        CliError::invalid_input(format!(
            "'{}' is not an account type (savings/checking).",
            raw.trim()
        ))
    })
}

/// Strips the line terminator left by `read_until`
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
