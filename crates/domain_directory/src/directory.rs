//! The user directory
//!
//! The [`Directory`] is the registry of users. It also owns the two
//! counters that number accounts and transactions, so independent
//! directories (one per test, for instance) never share ids.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use core_kernel::{AccountNumber, Clock, IdSequence, Money, MoneyError};
use domain_account::{Account, AccountType, InterestPolicy, LedgerContext};
use crate::error::DirectoryError;
use crate::registration::Registration;
use crate::user::User;

/// Registry of users keyed by username
#[derive(Debug)]
pub struct Directory {
    users: HashMap<String, User>,
    account_numbers: IdSequence,
    ledger: LedgerContext,
}

impl Directory {
    /// Creates an empty directory with both sequences starting at 1
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            account_numbers: IdSequence::new(),
            ledger: LedgerContext::new(Arc::new(IdSequence::new())),
        }
    }

    /// Sets the interest policy handed to accounts opened from now on
    pub fn with_interest_policy(mut self, policy: InterestPolicy) -> Self {
        self.ledger = self.ledger.with_interest_policy(policy);
        self
    }

    /// Sets the clock used for registration and ledger timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.ledger = self.ledger.with_clock(clock);
        self
    }

    /// Registers a new user
    ///
    /// # Errors
    ///
    /// - `DirectoryError::Validation` if either field is empty or too long
    /// - `DirectoryError::DuplicateUsername` if the username is taken
    pub fn register(&mut self, username: &str, password: &str) -> Result<&User, DirectoryError> {
        let registration = Registration::new(username, password);
        registration.check()?;

        if self.users.contains_key(&registration.username) {
            warn!(username = %registration.username, "Registration refused: username taken");
            return Err(DirectoryError::DuplicateUsername(registration.username));
        }

        let Registration { username, password } = registration;
        let user = User::new(username.clone(), password, self.ledger.now());
        info!(username = %username, "User registered");

        Ok(self.users.entry(username).or_insert(user))
    }

    /// Finds the user whose username and password both match exactly
    ///
    /// # Errors
    ///
    /// `DirectoryError::InvalidCredentials` on any mismatch, without saying
    /// which field was wrong
    pub fn login(&self, username: &str, password: &str) -> Result<&User, DirectoryError> {
        match self.users.get(username) {
            Some(user) if user.verify_password(password) => {
                info!(username = %username, "Login succeeded");
                Ok(user)
            }
            _ => {
                warn!(username = %username, "Login failed");
                Err(DirectoryError::InvalidCredentials)
            }
        }
    }

    /// Opens an account for `username`
    ///
    /// The initial deposit becomes the opening balance and is not recorded
    /// as a transaction.
    ///
    /// # Arguments
    ///
    /// * `username` - Owner of the new account
    /// * `holder_name` - Display name printed on statements
    /// * `account_type` - Savings or checking
    /// * `initial_deposit` - Opening balance, may be zero
    pub fn open_account(
        &mut self,
        username: &str,
        holder_name: &str,
        account_type: AccountType,
        initial_deposit: Money,
    ) -> Result<&Account, DirectoryError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| DirectoryError::user_not_found(username))?;

        let number: AccountNumber = self.account_numbers.next_id();
        let account = Account::open(
            number,
            holder_name,
            account_type,
            initial_deposit,
            self.ledger.clone(),
        );

        info!(
            username = %username,
            account_number = %number,
            account_type = %account_type,
            initial_deposit = %initial_deposit,
            "Account opened"
        );

        Ok(user.add_account(account))
    }

    /// Looks up a user
    pub fn user(&self, username: &str) -> Result<&User, DirectoryError> {
        self.users
            .get(username)
            .ok_or_else(|| DirectoryError::user_not_found(username))
    }

    /// Looks up a user for mutation
    pub fn user_mut(&mut self, username: &str) -> Result<&mut User, DirectoryError> {
        self.users
            .get_mut(username)
            .ok_or_else(|| DirectoryError::user_not_found(username))
    }

    /// Shorthand for `user_mut(username)?.account_mut(number)`
    pub fn account_mut(&mut self, username: &str, number: AccountNumber) -> Result<&mut Account, DirectoryError> {
        let account = self.user_mut(username)?.account_mut(number)?;
        debug!(username = %username, account_number = %number, "Account selected");
        Ok(account)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Sum of every balance held by every user
    pub fn total_holdings(&self) -> Result<Money, MoneyError> {
        self.users
            .values()
            .try_fold(Money::zero(), |total, user| total.checked_add(&user.total_balance()?))
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
