//! Registered users

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{AccountNumber, Money, MoneyError};
use domain_account::Account;
use crate::error::DirectoryError;

/// A registered user and the accounts they own
///
/// Accounts are owned exclusively; a user can only reach their own
/// accounts through [`User::account`] and [`User::account_mut`].
#[derive(Debug, Clone, Serialize)]
pub struct User {
    username: String,
    #[serde(skip_serializing)]
    password: String,
    accounts: Vec<Account>,
    registered_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(username: String, password: String, registered_at: DateTime<Utc>) -> Self {
        Self {
            username,
            password,
            accounts: Vec::new(),
            registered_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Plaintext, case-sensitive comparison
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Accounts in the order they were opened
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Looks up one of this user's accounts
    pub fn account(&self, number: AccountNumber) -> Result<&Account, DirectoryError> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or(DirectoryError::AccountNotFound(number))
    }

    /// Looks up one of this user's accounts for mutation
    pub fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, DirectoryError> {
        self.accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(DirectoryError::AccountNotFound(number))
    }

    /// Sum of the balances of all this user's accounts
    ///
    /// # Errors
    ///
    /// `MoneyError::Overflow` if the sum does not fit in a `Decimal`
    pub fn total_balance(&self) -> Result<Money, MoneyError> {
        Money::checked_sum(self.accounts.iter().map(Account::check_balance))
    }

    pub(crate) fn add_account(&mut self, account: Account) -> &Account {
        self.accounts.push(account);
        &self.accounts[self.accounts.len() - 1]
    }
}
