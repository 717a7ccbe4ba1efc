//! Ledger transactions
//!
//! A transaction records one event on one account's ledger. Once created it
//! is never modified; the account only appends.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, TransactionId};

/// Kind of ledger event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Operator-initiated deposit
    Deposit,
    /// Operator-initiated withdrawal
    Withdrawal,
    /// Deposit produced by the interest calculation
    InterestCredit,
}

impl TransactionKind {
    /// Returns true if this kind increases the balance
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Deposit | TransactionKind::InterestCredit)
    }

    /// Returns the label used on statements
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::InterestCredit => "Interest Credit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
    amount: Money,
}

impl Transaction {
    /// Creates a new transaction
    ///
    /// # Arguments
    ///
    /// * `id` - Globally unique id drawn from the directory's sequence
    /// * `timestamp` - When the event happened
    /// * `kind` - Deposit, withdrawal or interest credit
    /// * `amount` - Non-negative amount moved
    pub fn new(id: TransactionId, timestamp: DateTime<Utc>, kind: TransactionKind, amount: Money) -> Self {
        Self {
            id,
            timestamp,
            kind,
            amount,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Amount with its effect on the balance: positive for credits,
    /// negative for withdrawals
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_credit() {
            self.amount.amount()
        } else {
            -self.amount.amount()
        }
    }
}
