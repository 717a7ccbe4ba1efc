//! Account statements
//!
//! A [`Statement`] borrows the ledger and yields one [`StatementLine`] per
//! transaction, oldest first. It is an ordinary iterator: nothing is copied
//! up front, and cloning it restarts the walk.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::slice;

use core_kernel::{AccountNumber, Money, TransactionId};
use crate::transaction::{Transaction, TransactionKind};

/// Timestamp layout used when a line is printed
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One printed row of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub transaction_id: TransactionId,
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    pub amount: Money,
}

impl From<&Transaction> for StatementLine {
    fn from(tx: &Transaction) -> Self {
        Self {
            transaction_id: tx.id(),
            timestamp: tx.timestamp(),
            kind: tx.kind(),
            amount: tx.amount(),
        }
    }
}

impl fmt::Display for StatementLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount
        )
    }
}

/// Lazy, read-only view over an account's ledger
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    account_number: AccountNumber,
    holder_name: &'a str,
    opening_balance: Money,
    closing_balance: Money,
    lines: slice::Iter<'a, Transaction>,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(
        account_number: AccountNumber,
        holder_name: &'a str,
        opening_balance: Money,
        closing_balance: Money,
        transactions: &'a [Transaction],
    ) -> Self {
        Self {
            account_number,
            holder_name,
            opening_balance,
            closing_balance,
            lines: transactions.iter(),
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn holder_name(&self) -> &'a str {
        self.holder_name
    }

    /// Balance before the first ledger entry (the initial deposit)
    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    /// Balance after the last ledger entry
    pub fn closing_balance(&self) -> Money {
        self.closing_balance
    }
}

impl Iterator for Statement<'_> {
    type Item = StatementLine;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(StatementLine::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl ExactSizeIterator for Statement<'_> {}

impl std::iter::FusedIterator for Statement<'_> {}
