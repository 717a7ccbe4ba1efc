//! Shell error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_account::AccountError;
use domain_directory::DirectoryError;

/// Shell error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid choice")]
    InvalidChoice,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    EndOfInput,
}

impl CliError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Errors that end the session instead of being reported and skipped
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io(_) | CliError::EndOfInput | CliError::Config(_))
    }

    /// Text shown to the operator
    pub fn user_message(&self) -> String {
        match self {
            CliError::Directory(DirectoryError::InvalidCredentials) => {
                "Invalid credentials. Please try again.".to_string()
            }
            CliError::Directory(DirectoryError::AccountNotFound(_)) => "Account not found.".to_string(),
            CliError::Directory(DirectoryError::Account(err)) | CliError::Account(err) => {
                account_message(err)
            }
            CliError::Directory(err) => err.to_string(),
            CliError::InvalidChoice => "Invalid choice. Please try again.".to_string(),
            CliError::InvalidInput(_) => format!("{} Please try again.", self),
            other => format!("Error: {}", other),
        }
    }
}

fn account_message(err: &AccountError) -> String {
    match err {
        AccountError::InsufficientFunds { available, .. } => {
            format!("Insufficient funds. Available balance: {}", available)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{AccountNumber, Money};

    #[test]
    fn test_messages_match_console_wording() {
        let err = CliError::from(DirectoryError::InvalidCredentials);
        assert_eq!(err.user_message(), "Invalid credentials. Please try again.");

        let err = CliError::from(DirectoryError::AccountNotFound(AccountNumber::new(9)));
        assert_eq!(err.user_message(), "Account not found.");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = CliError::from(AccountError::InsufficientFunds {
            account_number: AccountNumber::new(1),
            requested: Money::from_minor(20000),
            available: Money::from_minor(12000),
        });
        assert_eq!(err.user_message(), "Insufficient funds. Available balance: 120.00");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_invalid_input_is_recoverable() {
        let err = CliError::invalid_input("'abc' is not a number.");
        assert!(!err.is_fatal());
        assert_eq!(err.user_message(), "Invalid input: 'abc' is not a number. Please try again.");
        assert!(CliError::EndOfInput.is_fatal());
        assert_eq!(CliError::InvalidChoice.user_message(), "Invalid choice. Please try again.");
    }
}
