//! Bank accounts and their ledgers
//!
//! An [`Account`] owns an append-only list of [`Transaction`]s and a running
//! balance. The balance always equals the opening balance plus the signed
//! sum of the ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{AccountNumber, Clock, IdSequence, Money, SystemClock};
use crate::error::AccountError;
use crate::interest::InterestPolicy;
use crate::statement::Statement;
use crate::transaction::{Transaction, TransactionKind};

/// Types of account a user can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Earns interest
    Savings,
    /// Everyday account, no interest
    Checking,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checking => "checking",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = AccountError;

    /// Parses an account type, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "savings" => Ok(AccountType::Savings),
            "checking" => Ok(AccountType::Checking),
            _ => Err(AccountError::UnknownAccountType(s.trim().to_string())),
        }
    }
}

/// Collaborators an account needs to record transactions
///
/// The directory builds one context and hands a clone to every account it
/// opens, so all accounts draw transaction ids from the same sequence.
#[derive(Debug, Clone)]
pub struct LedgerContext {
    transaction_ids: Arc<IdSequence>,
    clock: Arc<dyn Clock>,
    interest: InterestPolicy,
}

impl LedgerContext {
    /// Creates a context using the wall clock and the default interest policy
    pub fn new(transaction_ids: Arc<IdSequence>) -> Self {
        Self {
            transaction_ids,
            clock: Arc::new(SystemClock),
            interest: InterestPolicy::default(),
        }
    }

    /// Replaces the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the interest policy
    pub fn with_interest_policy(mut self, interest: InterestPolicy) -> Self {
        self.interest = interest;
        self
    }

    pub fn interest_policy(&self) -> InterestPolicy {
        self.interest
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

/// A bank account with its ledger
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    account_type: AccountType,
    opening_balance: Money,
    balance: Money,
    transactions: Vec<Transaction>,
    opened_at: DateTime<Utc>,
    #[serde(skip)]
    context: LedgerContext,
}

impl Account {
    /// Opens an account
    ///
    /// The initial deposit becomes the opening balance; it is not written to
    /// the ledger.
    ///
    /// # Arguments
    ///
    /// * `number` - Account number assigned by the directory
    /// * `holder_name` - Display name, not checked against the owning user
    /// * `account_type` - Savings or checking
    /// * `initial_deposit` - Opening balance
    /// * `context` - Id sequence, clock and interest policy
    pub fn open(
        number: AccountNumber,
        holder_name: impl Into<String>,
        account_type: AccountType,
        initial_deposit: Money,
        context: LedgerContext,
    ) -> Self {
        Self {
            number,
            holder_name: holder_name.into(),
            account_type,
            opening_balance: initial_deposit,
            balance: initial_deposit,
            transactions: Vec::new(),
            opened_at: context.now(),
            context,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// The ledger, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the current balance
    pub fn check_balance(&self) -> Money {
        self.balance
    }

    /// Credits `amount` to the account
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidAmount` for a zero amount
    pub fn deposit(&mut self, amount: Money) -> Result<&Transaction, AccountError> {
        self.require_positive(amount, "deposit")?;
        self.credit(TransactionKind::Deposit, amount)
    }

    /// Debits `amount` from the account
    ///
    /// Nothing changes when the balance does not cover the amount.
    /// Withdrawing exactly the balance leaves it at zero.
    ///
    /// # Errors
    ///
    /// - `AccountError::InvalidAmount` for a zero amount
    /// - `AccountError::InsufficientFunds` when `amount > balance`
    pub fn withdraw(&mut self, amount: Money) -> Result<&Transaction, AccountError> {
        self.require_positive(amount, "withdrawal")?;

        let balance = match self.balance.checked_sub(&amount) {
            Ok(balance) => balance,
            Err(_) => {
                warn!(
                    account_number = %self.number,
                    requested = %amount,
                    available = %self.balance,
                    "Withdrawal refused"
                );
                return Err(AccountError::InsufficientFunds {
                    account_number: self.number,
                    requested: amount,
                    available: self.balance,
                });
            }
        };

        self.balance = balance;
        Ok(self.record(TransactionKind::Withdrawal, amount))
    }

    /// Credits one month of interest to a savings account
    ///
    /// Returns `Ok(None)` without touching the account for other types.
    /// For savings accounts exactly one interest credit is recorded, even
    /// when the balance is zero.
    pub fn calculate_interest(&mut self) -> Result<Option<&Transaction>, AccountError> {
        let policy = self.context.interest_policy();
        if !policy.applies_to(self.account_type) {
            debug!(account_number = %self.number, account_type = %self.account_type, "No interest for account type");
            return Ok(None);
        }

        let interest = policy.interest_on(&self.balance)?;
        self.credit(TransactionKind::InterestCredit, interest).map(Some)
    }

    /// Lazily walks the ledger in insertion order
    ///
    /// Read-only; calling it again yields the same lines until the next
    /// mutation.
    pub fn generate_statement(&self) -> Statement<'_> {
        Statement::new(
            self.number,
            &self.holder_name,
            self.opening_balance,
            self.balance,
            &self.transactions,
        )
    }

    /// Checks that the balance equals the opening balance plus the signed
    /// sum of the ledger
    pub fn is_consistent(&self) -> bool {
        let ledger_total: Decimal = self.transactions.iter().map(Transaction::signed_amount).sum();
        self.opening_balance.amount() + ledger_total == self.balance.amount()
    }

    fn require_positive(&self, amount: Money, operation: &str) -> Result<(), AccountError> {
        if amount.is_zero() {
            return Err(AccountError::invalid_amount(format!(
                "{} amount must be greater than zero",
                operation
            )));
        }
        Ok(())
    }

    fn credit(&mut self, kind: TransactionKind, amount: Money) -> Result<&Transaction, AccountError> {
        self.balance = self.balance.checked_add(&amount)?;
        Ok(self.record(kind, amount))
    }

    fn record(&mut self, kind: TransactionKind, amount: Money) -> &Transaction {
        let transaction = Transaction::new(
            self.context.transaction_ids.next_id(),
            self.context.now(),
            kind,
            amount,
        );

        debug!(
            account_number = %self.number,
            transaction_id = %transaction.id(),
            kind = %kind,
            amount = %amount,
            balance = %self.balance,
            "Transaction recorded"
        );

        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }
}
