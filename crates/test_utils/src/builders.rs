//! Test Data Builders
//!
//! Provides builder patterns for constructing accounts and directories with
//! sensible defaults. Tests specify only the relevant fields.

use std::sync::Arc;

use core_kernel::{AccountNumber, Clock, IdSequence, Money};
use domain_account::{Account, AccountType, InterestPolicy, LedgerContext};
use domain_directory::Directory;

use crate::fixtures::{CredentialFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for a standalone account
pub struct TestAccountBuilder {
    number: AccountNumber,
    holder_name: String,
    account_type: AccountType,
    initial_deposit: Money,
    transaction_ids: Arc<IdSequence>,
    clock: Arc<dyn Clock>,
    interest_policy: InterestPolicy,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Savings account 1 for Alice with 100.00 and a fixed clock
    pub fn new() -> Self {
        Self {
            number: AccountNumber::new(1),
            holder_name: "Alice".to_string(),
            account_type: AccountType::Savings,
            initial_deposit: MoneyFixtures::hundred(),
            transaction_ids: Arc::new(IdSequence::new()),
            clock: TemporalFixtures::fixed_clock(),
            interest_policy: InterestPolicy::default(),
        }
    }

    pub fn with_number(mut self, number: u64) -> Self {
        self.number = AccountNumber::new(number);
        self
    }

    pub fn with_holder_name(mut self, name: impl Into<String>) -> Self {
        self.holder_name = name.into();
        self
    }

    pub fn checking(mut self) -> Self {
        self.account_type = AccountType::Checking;
        self
    }

    pub fn with_initial_deposit(mut self, amount: Money) -> Self {
        self.initial_deposit = amount;
        self
    }

    /// Shares a transaction sequence with other accounts
    pub fn with_transaction_ids(mut self, ids: Arc<IdSequence>) -> Self {
        self.transaction_ids = ids;
        self
    }

    pub fn with_interest_policy(mut self, policy: InterestPolicy) -> Self {
        self.interest_policy = policy;
        self
    }

    pub fn build(self) -> Account {
        let context = LedgerContext::new(self.transaction_ids)
            .with_clock(self.clock)
            .with_interest_policy(self.interest_policy);
        Account::open(
            self.number,
            self.holder_name,
            self.account_type,
            self.initial_deposit,
            context,
        )
    }
}

/// Builder for a directory pre-populated with users
pub struct TestDirectoryBuilder {
    users: Vec<(String, String)>,
    interest_policy: InterestPolicy,
}

impl Default for TestDirectoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDirectoryBuilder {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            interest_policy: InterestPolicy::default(),
        }
    }

    /// Adds the fixture user (`alice` / `secret`)
    pub fn with_default_user(self) -> Self {
        self.with_user(CredentialFixtures::username(), CredentialFixtures::password())
    }

    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((username.into(), password.into()));
        self
    }

    pub fn with_interest_policy(mut self, policy: InterestPolicy) -> Self {
        self.interest_policy = policy;
        self
    }

    /// Builds the directory, panicking if a user fails to register
    pub fn build(self) -> Directory {
        let mut directory = Directory::new()
            .with_clock(TemporalFixtures::fixed_clock())
            .with_interest_policy(self.interest_policy);
        for (username, password) in &self.users {
            directory
                .register(username, password)
                .expect("fixture user should register");
        }
        directory
    }
}
