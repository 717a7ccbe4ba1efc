//! Directory domain errors
//!
//! This module defines the errors raised while registering users, logging
//! in and looking up accounts.

use thiserror::Error;

use core_kernel::AccountNumber;
use domain_account::AccountError;

/// Errors that can occur in the directory domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Username and password did not match any user
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A user with this username is already registered
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// No user with this username
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The user owns no account with this number
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// Registration data failed validation
    #[error("Invalid registration: {0}")]
    Validation(String),

    /// Ledger operation failed
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl DirectoryError {
    /// Creates a UserNotFound error from any displayable name
    pub fn user_not_found(username: impl std::fmt::Display) -> Self {
        DirectoryError::UserNotFound(username.to_string())
    }
}
